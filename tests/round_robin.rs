//! Integration tests for round robin scheduling and points.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tournament_bracket_web::logic::round_robin_points;
use tournament_bracket_web::{
    generate_round_robin_matches, podium, start_tournament, update_match_score, Team, TeamId,
    Tournament, TournamentStatus, TournamentType,
};

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("T{i}"))).collect()
}

fn pair_key(a: TeamId, b: TeamId) -> (TeamId, TeamId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=9 {
        let t = teams(n);
        let matches = generate_round_robin_matches(&t);
        assert_eq!(matches.len(), n * (n - 1) / 2, "n = {n}");

        let pairs: HashSet<_> = matches
            .iter()
            .map(|m| pair_key(m.team_1.unwrap(), m.team_2.unwrap()))
            .collect();
        assert_eq!(pairs.len(), matches.len(), "duplicate pairing for n = {n}");
    }
}

#[test]
fn a_team_plays_at_most_once_per_round() {
    for n in [4, 5, 6, 7] {
        let matches = generate_round_robin_matches(&teams(n));
        let rounds = matches.iter().map(|m| m.round).max().unwrap();
        assert_eq!(rounds as usize, if n % 2 == 0 { n - 1 } else { n });
        for r in 1..=rounds {
            let mut seen = HashSet::new();
            for m in matches.iter().filter(|m| m.round == r) {
                assert!(seen.insert(m.team_1.unwrap()));
                assert!(seen.insert(m.team_2.unwrap()));
            }
        }
    }
}

#[test]
fn round_robin_matches_have_no_bracket_links() {
    let matches = generate_round_robin_matches(&teams(6));
    assert!(matches
        .iter()
        .all(|m| m.next_match_id.is_none() && m.loser_next_match_id.is_none()));
}

fn started(names: &[&str]) -> (Tournament, Vec<TeamId>) {
    let mut t = Tournament::new("League", "", TournamentType::RoundRobin);
    for name in names {
        t.add_team(*name, Vec::new()).unwrap();
    }
    let ids = t.teams.iter().map(|team| team.id).collect();
    (start_tournament(&t, &mut StdRng::seed_from_u64(3)).unwrap(), ids)
}

/// Score the match between `winner` and `loser` so that `winner` wins.
fn win(t: &Tournament, winner: TeamId, loser: TeamId) -> Tournament {
    let m = t.matches.iter().find(|m| m.is_between(winner, loser)).unwrap();
    let (s1, s2) = if m.team_1 == Some(winner) { (2, 1) } else { (1, 2) };
    update_match_score(t, m.id, s1, s2).unwrap()
}

#[test]
fn most_points_wins_the_league() {
    let (t, ids) = started(&["A", "B", "C"]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    let t = win(&t, b, a);
    let t = win(&t, b, c);
    assert_eq!(t.status, TournamentStatus::Ongoing);
    let t = win(&t, c, a);

    assert_eq!(t.status, TournamentStatus::Completed);
    assert_eq!(t.winner_id, Some(b));
    let points = round_robin_points(&t.teams, &t.matches);
    assert_eq!(points, vec![(a, 0), (b, 6), (c, 3)]);
}

#[test]
fn equal_points_go_to_the_first_registered_team() {
    let (t, ids) = started(&["A", "B", "C"]);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    let t = win(&t, a, b);
    let t = win(&t, b, c);
    let t = win(&t, c, a);
    assert_eq!(t.status, TournamentStatus::Completed);
    assert_eq!(t.winner_id, Some(a));
}

#[test]
fn a_drawn_match_keeps_the_league_open_but_counts_a_point_each() {
    let (t, ids) = started(&["A", "B"]);
    let t = update_match_score(&t, t.matches[0].id, 1, 1).unwrap();
    assert_eq!(t.status, TournamentStatus::Ongoing);
    let points = round_robin_points(&t.teams, &t.matches);
    assert_eq!(points, vec![(ids[0], 1), (ids[1], 1)]);
}

#[test]
fn podium_ranks_by_points() {
    let (t, ids) = started(&["A", "B", "C", "D"]);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    let t = win(&t, d, a);
    let t = win(&t, d, b);
    let t = win(&t, d, c);
    let t = win(&t, b, a);
    let t = win(&t, b, c);
    let t = win(&t, a, c);
    assert_eq!(t.status, TournamentStatus::Completed);

    let places = podium(&t);
    assert_eq!(places.first, t.winner_id);
    assert_eq!(places.first, Some(d));
    assert_eq!(places.second, Some(b));
    assert_eq!(places.third, Some(a));

    let podium_teams: HashSet<_> = [places.first, places.second, places.third]
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(podium_teams.len(), 3);
}
