//! Round robin: every pair of teams meets exactly once.

use crate::models::{Bracket, GameMatch, Team, TeamId};

/// Generate all round robin matches, scheduled into rounds with the circle method.
///
/// The first seat stays fixed while the others rotate one step per round. With an odd
/// team count a phantom seat is added; whoever draws it sits the round out. Rounds only
/// group matches for scheduling; there are no bracket links.
pub fn generate_round_robin_matches(teams: &[Team]) -> Vec<GameMatch> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut seats: Vec<Option<TeamId>> = teams.iter().map(|t| Some(t.id)).collect();
    if seats.len() % 2 == 1 {
        seats.push(None);
    }
    let n = seats.len();

    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);
    for round in 1..n {
        let mut position = 0;
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (seats[i], seats[n - 1 - i]) {
                matches.push(GameMatch::with_teams(
                    Some(a),
                    Some(b),
                    round as u32,
                    position,
                    Bracket::Winner,
                ));
                position += 1;
            }
        }
        seats[1..].rotate_right(1);
    }
    matches
}
