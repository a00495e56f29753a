//! Tournament, TournamentType and TournamentStatus.

use crate::models::game::{GameMatch, MatchId};
use crate::models::team::{Team, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// Start-eligibility check failed; carries the validation message.
    #[error("{0}")]
    StartRejected(String),
    /// Operation not allowed in the tournament's current status.
    #[error("Cannot {action} while the tournament is {status}")]
    InvalidTransition {
        action: &'static str,
        status: TournamentStatus,
    },
    #[error("Match {0} not found")]
    MatchNotFound(MatchId),
    #[error("Team name must not be empty")]
    EmptyTeamName,
    /// Team names are unique, case-insensitive.
    #[error("A team with this name already exists")]
    DuplicateTeamName,
    /// A winner or loser was routed into a match whose slots are both taken.
    #[error("Match {0} has no open slot")]
    NoOpenSlot(MatchId),
    /// Re-scoring would pull a team out of a match that already has a score.
    #[error("Match {0} has already been played")]
    DownstreamAlreadyPlayed(MatchId),
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Tournament format.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TournamentType {
    #[default]
    SingleElimination,
    DoubleElimination,
    RoundRobin,
    Swiss,
}

impl fmt::Display for TournamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TournamentType::SingleElimination => "single-elimination",
            TournamentType::DoubleElimination => "double-elimination",
            TournamentType::RoundRobin => "round-robin",
            TournamentType::Swiss => "swiss",
        };
        f.write_str(name)
    }
}

/// Lifecycle phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Adding teams; no matches yet.
    #[default]
    Registration,
    /// Matches generated; scores are being entered.
    Ongoing,
    /// Every playable match decided; `winner_id` frozen.
    Completed,
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TournamentStatus::Registration => "in registration",
            TournamentStatus::Ongoing => "ongoing",
            TournamentStatus::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Full tournament state: teams, matches and lifecycle phase.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TournamentType,
    pub created_at: DateTime<Utc>,
    /// Registration order.
    pub teams: Vec<Team>,
    pub matches: Vec<GameMatch>,
    pub status: TournamentStatus,
    /// Swiss only: round currently being played (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_round: Option<u32>,
    /// Swiss only: fixed at start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_rounds: Option<u32>,
    /// Set once when the tournament completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_id: Option<TeamId>,
}

impl Tournament {
    /// Create a new tournament in Registration with no teams.
    pub fn new(name: impl Into<String>, description: impl Into<String>, kind: TournamentType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            kind,
            created_at: Utc::now(),
            teams: Vec::new(),
            matches: Vec::new(),
            status: TournamentStatus::Registration,
            current_round: None,
            total_rounds: None,
            winner_id: None,
        }
    }

    /// Fail with `InvalidTransition` unless the tournament is in `expected` status.
    pub fn require_status(
        &self,
        expected: TournamentStatus,
        action: &'static str,
    ) -> Result<(), TournamentError> {
        if self.status != expected {
            return Err(TournamentError::InvalidTransition {
                action,
                status: self.status,
            });
        }
        Ok(())
    }

    /// Register a team (Registration only). Names must be unique (case-insensitive).
    /// Blank member names are dropped.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        members: Vec<String>,
    ) -> Result<TeamId, TournamentError> {
        self.require_status(TournamentStatus::Registration, "add a team")?;
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyTeamName);
        }
        let folded = name_trimmed.to_lowercase();
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.to_lowercase() == folded);
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let members = members
            .into_iter()
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect();
        let team = Team::with_members(name_trimmed, members);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Display name for a match slot: "TBD" while unassigned.
    pub fn team_name(&self, id: Option<TeamId>) -> &str {
        match id {
            None => "TBD",
            Some(id) => self.team(id).map_or("Unknown team", |t| t.name.as_str()),
        }
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Matches of one round (any bracket), in position order.
    pub fn round_matches(&self, round: u32) -> Vec<&GameMatch> {
        let mut matches: Vec<_> = self.matches.iter().filter(|m| m.round == round).collect();
        matches.sort_by_key(|m| (m.bracket as u8, m.position));
        matches
    }
}
