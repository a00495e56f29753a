//! Score entry for an ongoing tournament, completion detection and winner determination.

use crate::logic::scoring::apply_match_result;
use crate::logic::standings::{compute_standings, first_max, round_robin_points};
use crate::logic::swiss::advance_round;
use crate::models::{
    Bracket, MatchId, TeamId, Tournament, TournamentError, TournamentStatus, TournamentType,
};

/// Record a match score and run everything that follows from it.
///
/// 1. Score the match and propagate winner/loser.
/// 2. Swiss only: advance to the next round or complete when the round is done.
/// 3. Complete the tournament once no playable match is undecided.
pub fn update_match_score(
    tournament: &Tournament,
    match_id: MatchId,
    team_1_score: u32,
    team_2_score: u32,
) -> Result<Tournament, TournamentError> {
    tournament.require_status(TournamentStatus::Ongoing, "record a score")?;
    let mut updated = tournament.clone();
    apply_match_result(&mut updated, match_id, team_1_score, team_2_score)?;

    if updated.kind == TournamentType::Swiss {
        advance_round(&mut updated);
    }

    if updated.status != TournamentStatus::Completed && !has_pending_matches(&updated) {
        complete_tournament(&mut updated);
    }
    Ok(updated)
}

/// True while some match has both teams assigned and no winner.
pub fn has_pending_matches(tournament: &Tournament) -> bool {
    tournament.matches.iter().any(|m| m.is_pending())
}

/// Mark completed and freeze the winner. Only the first call has any effect.
pub(crate) fn complete_tournament(tournament: &mut Tournament) {
    if tournament.status == TournamentStatus::Completed {
        return;
    }
    tournament.status = TournamentStatus::Completed;
    tournament.winner_id = determine_tournament_winner(tournament);
    match tournament.winner_id {
        Some(id) => log::info!(
            "Tournament {} completed; winner: {}",
            tournament.id,
            tournament.team_name(Some(id))
        ),
        None => log::info!("Tournament {} completed without a winner", tournament.id),
    }
}

/// Winner of a completed tournament; None before completion.
///
/// - single elimination: winner of the last winners-bracket round
/// - double elimination: winner of the grand final
/// - round robin: most points, first registered team wins ties
/// - swiss: most wins, first registered team wins ties
pub fn determine_tournament_winner(tournament: &Tournament) -> Option<TeamId> {
    if tournament.status != TournamentStatus::Completed {
        return None;
    }
    match tournament.kind {
        TournamentType::SingleElimination => tournament
            .matches
            .iter()
            .filter(|m| m.bracket == Bracket::Winner)
            .max_by_key(|m| m.round)
            .and_then(|m| m.winner),
        TournamentType::DoubleElimination => tournament
            .matches
            .iter()
            .find(|m| m.bracket == Bracket::Final)
            .and_then(|m| m.winner),
        TournamentType::RoundRobin => {
            first_max(round_robin_points(&tournament.teams, &tournament.matches))
        }
        TournamentType::Swiss => first_max(
            compute_standings(&tournament.teams, &tournament.matches)
                .into_iter()
                .map(|s| (s.team_id, s.wins)),
        ),
    }
}
