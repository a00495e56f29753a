//! Single elimination bracket generation.

use crate::logic::next_power_of_two;
use crate::models::{Bracket, GameMatch, MatchId, Team};

/// Generate every match of a single elimination bracket.
///
/// The field is padded to the next power of two. Round 1 slots are filled left to right
/// in registration order; slots beyond the team count stay empty (byes). Later rounds start
/// empty and are filled as winners propagate through `next_match_id`.
pub fn generate_single_elimination_matches(teams: &[Team]) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }
    winners_bracket_rounds(teams).into_iter().flatten().collect()
}

/// Winners bracket grouped by round (index 0 is round 1), with `next_match_id` linked:
/// round r position i feeds round r+1 position i/2.
pub(crate) fn winners_bracket_rounds(teams: &[Team]) -> Vec<Vec<GameMatch>> {
    let target = next_power_of_two(teams.len());
    let rounds = target.trailing_zeros();

    let mut bracket: Vec<Vec<GameMatch>> = (1..=rounds)
        .map(|round| {
            let count = target >> round;
            (0..count)
                .map(|pos| {
                    if round == 1 {
                        GameMatch::with_teams(
                            teams.get(pos * 2).map(|t| t.id),
                            teams.get(pos * 2 + 1).map(|t| t.id),
                            round,
                            pos as u32,
                            Bracket::Winner,
                        )
                    } else {
                        GameMatch::new(round, pos as u32, Bracket::Winner)
                    }
                })
                .collect()
        })
        .collect();

    for r in 1..bracket.len() {
        let next_ids: Vec<MatchId> = bracket[r].iter().map(|m| m.id).collect();
        for (i, m) in bracket[r - 1].iter_mut().enumerate() {
            m.next_match_id = Some(next_ids[i / 2]);
        }
    }

    bracket
}
