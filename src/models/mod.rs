//! Data structures for the bracket engine: teams, matches, tournament state.

mod game;
mod team;
mod tournament;

pub use game::{Bracket, GameMatch, MatchId, Slot};
pub use team::{Team, TeamId};
pub use tournament::{
    Tournament, TournamentError, TournamentId, TournamentStatus, TournamentType,
};
