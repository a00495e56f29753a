//! Score entry and propagation of winners/losers into linked matches.

use crate::models::{MatchId, TeamId, Tournament, TournamentError, TournamentStatus};

/// Record a score and propagate the result one hop. Returns the updated tournament.
///
/// `team_1_score > team_2_score` makes team 1 the winner, the reverse makes team 2 the winner,
/// and equal scores leave the match undecided. The winner fills the first open slot of
/// `next_match_id`, the loser the first open slot of `loser_next_match_id`. If the match had
/// already been decided differently, its previous winner/loser are first taken back out of
/// those matches.
///
/// The input is never modified; on error nothing is applied.
pub fn update_match(
    tournament: &Tournament,
    match_id: MatchId,
    team_1_score: u32,
    team_2_score: u32,
) -> Result<Tournament, TournamentError> {
    tournament.require_status(TournamentStatus::Ongoing, "record a score")?;
    let mut updated = tournament.clone();
    apply_match_result(&mut updated, match_id, team_1_score, team_2_score)?;
    Ok(updated)
}

/// In-place version of [`update_match`] without the status check.
/// Leaves `tournament` partially updated on error; callers work on a copy.
pub(crate) fn apply_match_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    team_1_score: u32,
    team_2_score: u32,
) -> Result<(), TournamentError> {
    let m = tournament
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    let (prev_winner, prev_loser) = (m.winner, m.loser);
    let (next, loser_next) = (m.next_match_id, m.loser_next_match_id);
    let mut scored = m.clone();
    scored.record_score(team_1_score, team_2_score);
    let (winner, loser) = (scored.winner, scored.loser);

    if prev_winner != winner {
        if let (Some(team), Some(target)) = (prev_winner, next) {
            withdraw_team(tournament, target, team)?;
        }
    }
    if prev_loser != loser {
        if let (Some(team), Some(target)) = (prev_loser, loser_next) {
            withdraw_team(tournament, target, team)?;
        }
    }

    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    *m = scored;

    if let (Some(team), Some(target)) = (winner, next) {
        advance_team(tournament, target, team)?;
    }
    if let (Some(team), Some(target)) = (loser, loser_next) {
        advance_team(tournament, target, team)?;
    }
    Ok(())
}

/// Put `team` into the first open slot of `target`.
fn advance_team(tournament: &mut Tournament, target: MatchId, team: TeamId) -> Result<(), TournamentError> {
    let m = tournament
        .get_match_mut(target)
        .ok_or(TournamentError::MatchNotFound(target))?;
    if m.has_team(team) {
        return Ok(());
    }
    let slot = m.open_slot().ok_or(TournamentError::NoOpenSlot(target))?;
    m.set_team(slot, Some(team));
    Ok(())
}

/// Take back a previously propagated `team` from `target`, unless `target` was already played.
fn withdraw_team(tournament: &mut Tournament, target: MatchId, team: TeamId) -> Result<(), TournamentError> {
    let m = tournament
        .get_match_mut(target)
        .ok_or(TournamentError::MatchNotFound(target))?;
    let Some(slot) = m.slot_of(team) else {
        return Ok(());
    };
    if m.is_played() {
        return Err(TournamentError::DownstreamAlreadyPlayed(target));
    }
    m.set_team(slot, None);
    Ok(())
}
