//! Double elimination: winners bracket, losers bracket and a single grand final.
//!
//! For `2^W` slots the losers bracket has `2(W-1)` rounds, paired in equal sizes:
//!
//! - round 1 takes the winners round 1 losers, two per match;
//! - round `2j` takes the losers of winners round `j+1` (reverse position order)
//!   against the round `2j-1` survivors;
//! - round `2j+1` consolidates the round `2j` survivors.
//!
//! The winners-bracket champion and the losers-bracket champion meet in the final.
//! There is no bracket reset.

use crate::logic::single_elimination::winners_bracket_rounds;
use crate::models::{Bracket, GameMatch, MatchId, Team};

/// Generate every match of a double elimination bracket.
pub fn generate_double_elimination_matches(teams: &[Team]) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut winners = winners_bracket_rounds(teams);
    let winner_rounds = winners.len();
    let slots = 1usize << winner_rounds;

    let mut losers: Vec<Vec<GameMatch>> = (1..=loser_round_count(winner_rounds))
        .map(|round| {
            (0..loser_round_size(slots, round))
                .map(|pos| GameMatch::new(round as u32, pos as u32, Bracket::Loser))
                .collect()
        })
        .collect();

    let grand_final = GameMatch::new(winner_rounds as u32 + 1, 0, Bracket::Final);

    let loser_ids: Vec<Vec<MatchId>> = losers
        .iter()
        .map(|round| round.iter().map(|m| m.id).collect())
        .collect();

    // Winners bracket drop-outs.
    for (k, round) in winners.iter_mut().enumerate() {
        for (i, m) in round.iter_mut().enumerate() {
            m.loser_next_match_id = if loser_ids.is_empty() {
                // Two-team field: the only loser goes straight to the final.
                Some(grand_final.id)
            } else if k == 0 {
                Some(loser_ids[0][i / 2])
            } else {
                let target = &loser_ids[2 * k - 1];
                Some(target[target.len() - 1 - i])
            };
        }
    }

    // Losers bracket advancement. Round r (1-based) is index r-1.
    for idx in 0..losers.len() {
        let round = idx + 1;
        let is_last = idx + 1 == losers.len();
        for (i, m) in losers[idx].iter_mut().enumerate() {
            m.next_match_id = if is_last {
                Some(grand_final.id)
            } else if round % 2 == 1 {
                Some(loser_ids[idx + 1][i])
            } else {
                Some(loser_ids[idx + 1][i / 2])
            };
        }
    }

    if let Some(final_match) = winners.last_mut().and_then(|round| round.first_mut()) {
        final_match.next_match_id = Some(grand_final.id);
    }

    winners
        .into_iter()
        .flatten()
        .chain(losers.into_iter().flatten())
        .chain(std::iter::once(grand_final))
        .collect()
}

/// Number of losers bracket rounds for a winners bracket of `winner_rounds` rounds.
pub fn loser_round_count(winner_rounds: usize) -> usize {
    2 * winner_rounds.saturating_sub(1)
}

/// Matches in losers bracket round `round` (1-based) for a field of `slots` (a power of two).
pub fn loser_round_size(slots: usize, round: usize) -> usize {
    slots >> ((round + 1) / 2 + 1)
}
