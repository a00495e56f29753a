//! Tournament bracket engine: library with models, bracket generation and scoring logic.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    advance_swiss_tournament, compute_standings, determine_tournament_winner, execute,
    generate_double_elimination_matches, generate_round_robin_matches,
    generate_single_elimination_matches, generate_swiss_matches, generate_swiss_round,
    next_power_of_two, podium, sorted_standings, start_tournament, swiss_total_rounds,
    update_match, update_match_score, validate_tournament_start, Podium, Standing,
    StartValidation, SwissAdvance, TournamentCommand,
};
pub use models::{
    Bracket, GameMatch, MatchId, Slot, Team, TeamId, Tournament, TournamentError, TournamentId,
    TournamentStatus, TournamentType,
};
pub use store::{MemoryStore, StoreError, TournamentStore};
