//! Setup phase: start-eligibility and the Registration -> Ongoing transition.

use crate::logic::double_elimination::generate_double_elimination_matches;
use crate::logic::next_power_of_two;
use crate::logic::round_robin::generate_round_robin_matches;
use crate::logic::single_elimination::generate_single_elimination_matches;
use crate::logic::swiss::{generate_swiss_first_round, swiss_total_rounds};
use crate::models::{GameMatch, Tournament, TournamentError, TournamentStatus, TournamentType};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Minimum number of teams for any format.
pub const MIN_TEAMS: usize = 2;

/// Result of the start-eligibility check. `message` explains a rejection.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StartValidation {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StartValidation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Check whether the registered teams allow the tournament to start.
///
/// Every format needs at least two teams; single elimination needs an exact power of two.
pub fn validate_tournament_start(tournament: &Tournament) -> StartValidation {
    let count = tournament.teams.len();
    if count < MIN_TEAMS {
        return StartValidation::rejected(format!(
            "At least {MIN_TEAMS} teams are required to start the tournament."
        ));
    }
    if tournament.kind == TournamentType::SingleElimination {
        let required = next_power_of_two(count);
        if count != required {
            let missing = required - count;
            let noun = if missing == 1 { "team" } else { "teams" };
            return StartValidation::rejected(format!(
                "Single elimination requires {required} teams. Add {missing} more {noun}."
            ));
        }
    }
    StartValidation::ok()
}

/// Start the tournament: validate, generate the bracket and move to Ongoing.
///
/// Swiss tournaments get round 1 only, plus `current_round = 1` and a fixed `total_rounds`.
pub fn start_tournament<R: Rng + ?Sized>(
    tournament: &Tournament,
    rng: &mut R,
) -> Result<Tournament, TournamentError> {
    tournament.require_status(TournamentStatus::Registration, "start")?;
    let validation = validate_tournament_start(tournament);
    if !validation.valid {
        return Err(TournamentError::StartRejected(
            validation.message.unwrap_or_default(),
        ));
    }

    let mut updated = tournament.clone();
    updated.matches = generate_tournament_matches(&mut updated, rng);
    updated.status = TournamentStatus::Ongoing;
    log::info!(
        "Started {} tournament {} with {} teams and {} matches",
        updated.kind,
        updated.id,
        updated.teams.len(),
        updated.matches.len()
    );
    Ok(updated)
}

/// Dispatch to the generator for the tournament's format. Sets the Swiss round counters.
pub fn generate_tournament_matches<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Vec<GameMatch> {
    let teams = &tournament.teams;
    match tournament.kind {
        TournamentType::SingleElimination => generate_single_elimination_matches(teams),
        TournamentType::DoubleElimination => generate_double_elimination_matches(teams),
        TournamentType::RoundRobin => generate_round_robin_matches(teams),
        TournamentType::Swiss => {
            tournament.total_rounds = Some(swiss_total_rounds(teams.len()));
            tournament.current_round = Some(1);
            generate_swiss_first_round(&tournament.teams, rng)
        }
    }
}
