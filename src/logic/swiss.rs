//! Swiss system: round-by-round pairing and round advancement.

use crate::logic::results::complete_tournament;
use crate::logic::standings::compute_standings;
use crate::models::{
    Bracket, GameMatch, Team, TeamId, Tournament, TournamentError, TournamentStatus, TournamentType,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of Swiss rounds for a field: ceil(log2(team_count)).
pub fn swiss_total_rounds(team_count: usize) -> u32 {
    team_count.max(1).next_power_of_two().trailing_zeros()
}

/// Generate the matches of one Swiss round. Round 1 is a random draw; later rounds pair by standings.
pub fn generate_swiss_matches<R: Rng + ?Sized>(
    teams: &[Team],
    round: u32,
    prior_matches: &[GameMatch],
    rng: &mut R,
) -> Vec<GameMatch> {
    if round <= 1 {
        generate_swiss_first_round(teams, rng)
    } else {
        generate_swiss_round(teams, round, prior_matches)
    }
}

/// Round 1: shuffle and pair neighbours. With an odd count the last team after the shuffle
/// sits the round out (no match is recorded for it).
pub fn generate_swiss_first_round<R: Rng + ?Sized>(teams: &[Team], rng: &mut R) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }
    let mut shuffled: Vec<&Team> = teams.iter().collect();
    shuffled.shuffle(rng);

    let matches: Vec<GameMatch> = shuffled
        .chunks_exact(2)
        .enumerate()
        .map(|(pos, pair)| {
            GameMatch::with_teams(Some(pair[0].id), Some(pair[1].id), 1, pos as u32, Bracket::Winner)
        })
        .collect();

    if let [bye] = shuffled.chunks_exact(2).remainder() {
        log::info!("Team {} gets a bye in round 1", bye.name);
    }
    matches
}

/// Round 2+: sort by wins (descending, stable) and greedily pair each team with the next
/// unpaired team it has not met yet. A team left without a legal opponent gets a bye.
pub fn generate_swiss_round(teams: &[Team], round: u32, prior_matches: &[GameMatch]) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }
    let mut standings = compute_standings(teams, prior_matches);
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    let order: Vec<TeamId> = standings.iter().map(|s| s.team_id).collect();

    let have_met = |a: TeamId, b: TeamId| prior_matches.iter().any(|m| m.is_between(a, b));

    let mut paired = vec![false; order.len()];
    let mut matches = Vec::new();
    for i in 0..order.len() {
        if paired[i] {
            continue;
        }
        paired[i] = true;
        let opponent = (i + 1..order.len()).find(|&j| !paired[j] && !have_met(order[i], order[j]));
        match opponent {
            Some(j) => {
                paired[j] = true;
                matches.push(GameMatch::with_teams(
                    Some(order[i]),
                    Some(order[j]),
                    round,
                    matches.len() as u32,
                    Bracket::Winner,
                ));
            }
            None => {
                let name = teams
                    .iter()
                    .find(|t| t.id == order[i])
                    .map_or("?", |t| t.name.as_str());
                log::info!("Team {} gets a bye in round {}", name, round);
            }
        }
    }
    matches
}

/// Outcome of checking a Swiss tournament after a score update.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwissAdvance {
    /// Some match of the current round is still undecided.
    InProgress,
    /// The current round finished and this round was generated.
    NextRound(u32),
    /// The final round finished (or no further pairing was possible).
    Completed,
}

/// Advance a Swiss tournament once its current round is fully decided.
///
/// Returns the updated tournament together with what happened. Requires `ongoing`; the input
/// is left untouched. Other formats come back unchanged with `InProgress`.
pub fn advance_swiss_tournament(
    tournament: &Tournament,
) -> Result<(Tournament, SwissAdvance), TournamentError> {
    tournament.require_status(TournamentStatus::Ongoing, "advance a Swiss round")?;
    let mut updated = tournament.clone();
    let outcome = advance_round(&mut updated);
    Ok((updated, outcome))
}

/// In-place version of [`advance_swiss_tournament`] without the status check.
///
/// Either appends the next round and bumps `current_round`, or completes the tournament
/// when the last round is done.
pub(crate) fn advance_round(tournament: &mut Tournament) -> SwissAdvance {
    let Some(current_round) = tournament.current_round else {
        return SwissAdvance::InProgress;
    };
    if tournament.kind != TournamentType::Swiss {
        return SwissAdvance::InProgress;
    }

    let round_done = tournament
        .round_matches(current_round)
        .iter()
        .all(|m| m.is_decided());
    if !round_done {
        return SwissAdvance::InProgress;
    }

    let total_rounds = tournament
        .total_rounds
        .unwrap_or_else(|| swiss_total_rounds(tournament.teams.len()));
    if current_round >= total_rounds {
        complete_tournament(tournament);
        return SwissAdvance::Completed;
    }

    let next_round = current_round + 1;
    let next_matches = generate_swiss_round(&tournament.teams, next_round, &tournament.matches);
    if next_matches.is_empty() {
        log::info!("No pairings left for round {}; ending tournament", next_round);
        complete_tournament(tournament);
        return SwissAdvance::Completed;
    }

    log::info!(
        "Round {} complete; starting round {} with {} matches",
        current_round,
        next_round,
        next_matches.len()
    );
    tournament.matches.extend(next_matches);
    tournament.current_round = Some(next_round);
    SwissAdvance::NextRound(next_round)
}
