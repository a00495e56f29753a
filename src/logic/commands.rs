//! Commands against a tournament, applied as value-returning transformations.

use crate::logic::results::update_match_score;
use crate::logic::setup::start_tournament;
use crate::models::{MatchId, Tournament, TournamentError};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A mutation a caller can request. Serializable so a caller can log or replay them.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum TournamentCommand {
    AddTeam {
        name: String,
        #[serde(default)]
        members: Vec<String>,
    },
    Start,
    RecordScore {
        match_id: MatchId,
        team_1_score: u32,
        team_2_score: u32,
    },
}

/// Apply one command and return the resulting tournament. The input is left untouched.
///
/// `rng` is only consulted when starting a Swiss tournament.
pub fn execute<R: Rng + ?Sized>(
    tournament: &Tournament,
    command: TournamentCommand,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    match command {
        TournamentCommand::AddTeam { name, members } => {
            let mut updated = tournament.clone();
            updated.add_team(name, members)?;
            Ok(updated)
        }
        TournamentCommand::Start => start_tournament(tournament, rng),
        TournamentCommand::RecordScore {
            match_id,
            team_1_score,
            team_2_score,
        } => update_match_score(tournament, match_id, team_1_score, team_2_score),
    }
}
