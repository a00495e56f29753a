//! Storage interface for tournaments. The engine never persists anything itself;
//! callers save the returned tournament after every mutation.

use crate::models::{Tournament, TournamentId};
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum StoreError {
    #[error("Tournament {0} not found")]
    NotFound(TournamentId),
}

/// Tournament persistence as seen by callers of the engine.
pub trait TournamentStore {
    fn load_all(&self) -> Result<Vec<Tournament>, StoreError>;
    fn load_one(&self, id: TournamentId) -> Result<Option<Tournament>, StoreError>;
    /// Insert, or replace the stored tournament with the same id.
    fn save(&mut self, tournament: Tournament) -> Result<(), StoreError>;
    fn delete(&mut self, id: TournamentId) -> Result<(), StoreError>;
}

/// In-memory store. Keeps insertion order so listings are stable.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    tournaments: Vec<Tournament>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Tournament>, StoreError> {
        Ok(self.tournaments.clone())
    }

    fn load_one(&self, id: TournamentId) -> Result<Option<Tournament>, StoreError> {
        Ok(self.tournaments.iter().find(|t| t.id == id).cloned())
    }

    fn save(&mut self, tournament: Tournament) -> Result<(), StoreError> {
        match self.tournaments.iter_mut().find(|t| t.id == tournament.id) {
            Some(existing) => *existing = tournament,
            None => self.tournaments.push(tournament),
        }
        Ok(())
    }

    fn delete(&mut self, id: TournamentId) -> Result<(), StoreError> {
        let idx = self
            .tournaments
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tournaments.remove(idx);
        Ok(())
    }
}
