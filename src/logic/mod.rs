//! Tournament business logic: bracket generation, scoring, lifecycle.

mod commands;
mod double_elimination;
mod results;
mod round_robin;
mod scoring;
mod setup;
mod single_elimination;
mod standings;
mod swiss;

pub use commands::{execute, TournamentCommand};
pub use double_elimination::{
    generate_double_elimination_matches, loser_round_count, loser_round_size,
};
pub use results::{determine_tournament_winner, has_pending_matches, update_match_score};
pub use round_robin::generate_round_robin_matches;
pub use scoring::update_match;
pub use setup::{
    generate_tournament_matches, start_tournament, validate_tournament_start, StartValidation,
    MIN_TEAMS,
};
pub use single_elimination::generate_single_elimination_matches;
pub use standings::{
    compute_standings, podium, round_robin_points, sorted_standings, Podium, Standing,
    POINTS_FOR_DRAW, POINTS_FOR_WIN,
};
pub use swiss::{
    advance_swiss_tournament, generate_swiss_first_round, generate_swiss_matches,
    generate_swiss_round, swiss_total_rounds, SwissAdvance,
};

/// Smallest power of two >= n (`next_power_of_two(1) == 1`; 0 is treated as 1).
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}
