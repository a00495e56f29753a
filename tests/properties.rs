/// Property-based tests for bracket generation and score recording.
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tournament_bracket_web::{
    generate_double_elimination_matches, generate_round_robin_matches,
    generate_single_elimination_matches, generate_swiss_matches, next_power_of_two, Bracket,
    GameMatch, Team,
};

fn teams(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::new(format!("T{i}"))).collect()
}

proptest! {
    #[test]
    fn next_power_of_two_is_the_smallest_bound(n in 1usize..5000) {
        let p = next_power_of_two(n);
        prop_assert!(p.is_power_of_two());
        prop_assert!(p >= n);
        prop_assert!(p / 2 < n);
    }

    #[test]
    fn single_elimination_fills_a_full_bracket(n in 2usize..70) {
        let t = teams(n);
        let matches = generate_single_elimination_matches(&t);
        prop_assert_eq!(matches.len(), next_power_of_two(n) - 1);

        let seeded: Vec<_> = matches
            .iter()
            .filter(|m| m.round == 1)
            .flat_map(|m| [m.team_1, m.team_2])
            .flatten()
            .collect();
        prop_assert_eq!(seeded.len(), n);
    }

    #[test]
    fn double_elimination_has_twice_the_slots_minus_two(n in 2usize..70) {
        let matches = generate_double_elimination_matches(&teams(n));
        prop_assert_eq!(matches.len(), 2 * next_power_of_two(n) - 2);

        let ids: HashSet<_> = matches.iter().map(|m| m.id).collect();
        for m in &matches {
            for link in [m.next_match_id, m.loser_next_match_id].into_iter().flatten() {
                prop_assert!(ids.contains(&link));
            }
        }
        prop_assert_eq!(matches.iter().filter(|m| m.bracket == Bracket::Final).count(), 1);
    }

    #[test]
    fn round_robin_pairs_are_unique_and_complete(n in 2usize..24) {
        let matches = generate_round_robin_matches(&teams(n));
        prop_assert_eq!(matches.len(), n * (n - 1) / 2);
        let pairs: HashSet<_> = matches
            .iter()
            .map(|m| {
                let (a, b) = (m.team_1.unwrap(), m.team_2.unwrap());
                if a < b { (a, b) } else { (b, a) }
            })
            .collect();
        prop_assert_eq!(pairs.len(), matches.len());
    }

    #[test]
    fn swiss_first_round_uses_each_team_at_most_once(n in 2usize..40, seed in any::<u64>()) {
        let t = teams(n);
        let matches = generate_swiss_matches(&t, 1, &[], &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(matches.len(), n / 2);
        let mut seen = HashSet::new();
        for m in &matches {
            prop_assert!(seen.insert(m.team_1.unwrap()));
            prop_assert!(seen.insert(m.team_2.unwrap()));
        }
    }

    #[test]
    fn recorded_scores_decide_by_comparison(s1 in 0u32..50, s2 in 0u32..50) {
        let (a, b) = (Team::new("A"), Team::new("B"));
        let mut m = GameMatch::with_teams(Some(a.id), Some(b.id), 1, 0, Bracket::Winner);
        m.record_score(s1, s2);

        prop_assert_eq!((m.team_1_score, m.team_2_score), (Some(s1), Some(s2)));
        let expected = match s1.cmp(&s2) {
            std::cmp::Ordering::Greater => (Some(a.id), Some(b.id)),
            std::cmp::Ordering::Less => (Some(b.id), Some(a.id)),
            std::cmp::Ordering::Equal => (None, None),
        };
        prop_assert_eq!((m.winner, m.loser), expected);
    }
}
