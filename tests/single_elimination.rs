//! Integration tests for single elimination bracket generation.

use tournament_bracket_web::{
    generate_single_elimination_matches, next_power_of_two, Bracket, GameMatch, Team,
};

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("T{i}"))).collect()
}

fn round(matches: &[GameMatch], round: u32) -> Vec<&GameMatch> {
    let mut r: Vec<_> = matches.iter().filter(|m| m.round == round).collect();
    r.sort_by_key(|m| m.position);
    r
}

#[test]
fn next_power_of_two_examples() {
    assert_eq!(next_power_of_two(1), 1);
    assert_eq!(next_power_of_two(2), 2);
    assert_eq!(next_power_of_two(3), 4);
    assert_eq!(next_power_of_two(5), 8);
    assert_eq!(next_power_of_two(8), 8);
    assert_eq!(next_power_of_two(9), 16);
}

#[test]
fn fewer_than_two_teams_generate_nothing() {
    assert!(generate_single_elimination_matches(&teams(0)).is_empty());
    assert!(generate_single_elimination_matches(&teams(1)).is_empty());
}

#[test]
fn two_teams_play_a_single_final() {
    let t = teams(2);
    let matches = generate_single_elimination_matches(&t);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].team_1, Some(t[0].id));
    assert_eq!(matches[0].team_2, Some(t[1].id));
    assert_eq!(matches[0].next_match_id, None);
}

#[test]
fn eight_teams_build_three_linked_rounds() {
    let matches = generate_single_elimination_matches(&teams(8));
    assert_eq!(matches.len(), 7);
    assert_eq!(round(&matches, 1).len(), 4);
    assert_eq!(round(&matches, 2).len(), 2);
    assert_eq!(round(&matches, 3).len(), 1);

    for m in &matches {
        assert_eq!(m.bracket, Bracket::Winner);
        assert_eq!(m.loser_next_match_id, None);
        if m.round == 3 {
            assert_eq!(m.next_match_id, None);
            continue;
        }
        let next_id = m.next_match_id.expect("non-final match must be linked");
        let next = matches.iter().find(|n| n.id == next_id).unwrap();
        assert_eq!(next.round, m.round + 1);
        assert_eq!(next.position, m.position / 2);
    }
}

#[test]
fn later_rounds_start_empty() {
    let matches = generate_single_elimination_matches(&teams(4));
    let final_round = round(&matches, 2);
    assert_eq!(final_round.len(), 1);
    assert_eq!(final_round[0].team_1, None);
    assert_eq!(final_round[0].team_2, None);
    assert_eq!(final_round[0].team_1_score, None);
}

#[test]
fn round_one_filled_in_registration_order_with_byes() {
    let t = teams(5);
    let matches = generate_single_elimination_matches(&t);
    assert_eq!(matches.len(), 7);

    let first = round(&matches, 1);
    assert_eq!(first.len(), 4);
    assert_eq!((first[0].team_1, first[0].team_2), (Some(t[0].id), Some(t[1].id)));
    assert_eq!((first[1].team_1, first[1].team_2), (Some(t[2].id), Some(t[3].id)));
    assert_eq!((first[2].team_1, first[2].team_2), (Some(t[4].id), None));
    assert_eq!((first[3].team_1, first[3].team_2), (None, None));
}
