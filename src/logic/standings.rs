//! Read-only analysis over recorded matches: standings, points and podium.

use crate::models::{Bracket, GameMatch, Team, TeamId, Tournament, TournamentStatus, TournamentType};
use serde::{Deserialize, Serialize};

/// Points for a decided round robin match.
pub const POINTS_FOR_WIN: u32 = 3;
/// Points each for a match recorded with equal scores.
pub const POINTS_FOR_DRAW: u32 = 1;

/// Aggregate wins/losses of one team.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub wins: u32,
    pub losses: u32,
}

/// Wins and losses per team, in registration order.
pub fn compute_standings(teams: &[Team], matches: &[GameMatch]) -> Vec<Standing> {
    teams
        .iter()
        .map(|team| Standing {
            team_id: team.id,
            wins: matches.iter().filter(|m| m.winner == Some(team.id)).count() as u32,
            losses: matches.iter().filter(|m| m.loser == Some(team.id)).count() as u32,
        })
        .collect()
}

/// Standings table order: wins descending, then losses ascending. Stable.
pub fn sorted_standings(teams: &[Team], matches: &[GameMatch]) -> Vec<Standing> {
    let mut standings = compute_standings(teams, matches);
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
    standings
}

/// Round robin points per team, in registration order.
///
/// Equal recorded scores give both sides a draw; otherwise the winner takes the win points.
pub fn round_robin_points(teams: &[Team], matches: &[GameMatch]) -> Vec<(TeamId, u32)> {
    let mut points: Vec<(TeamId, u32)> = teams.iter().map(|t| (t.id, 0)).collect();
    let mut award = |id: Option<TeamId>, amount: u32| {
        if let Some(entry) = id.and_then(|id| points.iter_mut().find(|(t, _)| *t == id)) {
            entry.1 += amount;
        }
    };
    for m in matches {
        let (Some(s1), Some(s2)) = (m.team_1_score, m.team_2_score) else {
            continue;
        };
        if s1 == s2 {
            award(m.team_1, POINTS_FOR_DRAW);
            award(m.team_2, POINTS_FOR_DRAW);
        } else {
            award(m.winner, POINTS_FOR_WIN);
        }
    }
    points
}

/// First entry with the strictly highest value wins ties.
pub(crate) fn first_max(values: impl IntoIterator<Item = (TeamId, u32)>) -> Option<TeamId> {
    let mut best: Option<(TeamId, u32)> = None;
    for (id, value) in values {
        if best.map_or(true, |(_, v)| value > v) {
            best = Some((id, value));
        }
    }
    best.map(|(id, _)| id)
}

/// Top three of a completed tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Podium {
    pub first: Option<TeamId>,
    pub second: Option<TeamId>,
    pub third: Option<TeamId>,
}

/// Derive first to third place from a completed tournament. Empty until completion.
pub fn podium(tournament: &Tournament) -> Podium {
    if tournament.status != TournamentStatus::Completed {
        return Podium::default();
    }
    let first = tournament.winner_id;

    match tournament.kind {
        TournamentType::SingleElimination => {
            let final_round = tournament
                .matches
                .iter()
                .filter(|m| m.bracket == Bracket::Winner)
                .map(|m| m.round)
                .max()
                .unwrap_or(0);
            let second = tournament
                .matches
                .iter()
                .find(|m| m.bracket == Bracket::Winner && m.round == final_round)
                .and_then(|m| m.loser);
            let third = tournament
                .matches
                .iter()
                .filter(|m| {
                    final_round > 1 && m.bracket == Bracket::Winner && m.round == final_round - 1
                })
                .min_by_key(|m| m.position)
                .and_then(|m| m.loser);
            Podium { first, second, third }
        }
        TournamentType::DoubleElimination => {
            let second = tournament
                .matches
                .iter()
                .find(|m| m.bracket == Bracket::Final)
                .and_then(|m| m.loser);
            let third = tournament
                .matches
                .iter()
                .filter(|m| m.bracket == Bracket::Loser)
                .max_by_key(|m| m.round)
                .and_then(|m| m.loser);
            Podium { first, second, third }
        }
        TournamentType::RoundRobin | TournamentType::Swiss => {
            let mut ranked: Vec<(TeamId, u32)> = compute_standings(&tournament.teams, &tournament.matches)
                .into_iter()
                .map(|s| (s.team_id, s.wins * POINTS_FOR_WIN))
                .collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            Podium {
                first,
                second: ranked.get(1).map(|(id, _)| *id),
                third: ranked.get(2).map(|(id, _)| *id),
            }
        }
    }
}
