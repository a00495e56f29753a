//! Match (game), Bracket, and Slot for bracket play.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// One of the two team slots of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    #[default]
    One,
    Two,
}

/// Which side of the bracket this match belongs to.
///
/// `Winner` is used by every single-bracket format and by the winners' side
/// of double elimination.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bracket {
    #[default]
    Winner,
    Loser,
    Final,
}

/// A single match between two team slots.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// None until a team is seeded or propagated into the slot.
    pub team_1: Option<TeamId>,
    pub team_2: Option<TeamId>,
    /// None if not yet played.
    pub team_1_score: Option<u32>,
    pub team_2_score: Option<u32>,
    /// None while undecided (not played, or tied).
    pub winner: Option<TeamId>,
    pub loser: Option<TeamId>,
    /// Match the winner advances into (None for a bracket's final match).
    pub next_match_id: Option<MatchId>,
    /// Match the loser drops into (losers bracket routing only).
    pub loser_next_match_id: Option<MatchId>,
    /// 1-based, increasing toward the final.
    pub round: u32,
    /// 0-based index within the round.
    pub position: u32,
    pub bracket: Bracket,
}

impl GameMatch {
    /// Create an empty match (both slots unassigned, no links).
    pub fn new(round: u32, position: u32, bracket: Bracket) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_1: None,
            team_2: None,
            team_1_score: None,
            team_2_score: None,
            winner: None,
            loser: None,
            next_match_id: None,
            loser_next_match_id: None,
            round,
            position,
            bracket,
        }
    }

    /// Create a match with its slots already seeded.
    pub fn with_teams(
        team_1: Option<TeamId>,
        team_2: Option<TeamId>,
        round: u32,
        position: u32,
        bracket: Bracket,
    ) -> Self {
        Self {
            team_1,
            team_2,
            ..Self::new(round, position, bracket)
        }
    }

    /// Both slots are assigned, so the match can actually be played.
    pub fn is_playable(&self) -> bool {
        self.team_1.is_some() && self.team_2.is_some()
    }

    /// Both scores have been recorded (a tie counts as played).
    pub fn is_played(&self) -> bool {
        self.team_1_score.is_some() && self.team_2_score.is_some()
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// Playable but without a winner yet.
    pub fn is_pending(&self) -> bool {
        self.is_playable() && !self.is_decided()
    }

    pub fn team(&self, slot: Slot) -> Option<TeamId> {
        match slot {
            Slot::One => self.team_1,
            Slot::Two => self.team_2,
        }
    }

    /// Slot occupied by the given team, if any.
    pub fn slot_of(&self, team: TeamId) -> Option<Slot> {
        if self.team_1 == Some(team) {
            Some(Slot::One)
        } else if self.team_2 == Some(team) {
            Some(Slot::Two)
        } else {
            None
        }
    }

    pub fn has_team(&self, team: TeamId) -> bool {
        self.slot_of(team).is_some()
    }

    /// True if the two teams face each other in this match (either order).
    pub fn is_between(&self, a: TeamId, b: TeamId) -> bool {
        (self.team_1 == Some(a) && self.team_2 == Some(b))
            || (self.team_1 == Some(b) && self.team_2 == Some(a))
    }

    /// First unassigned slot; `One` is checked before `Two`.
    pub fn open_slot(&self) -> Option<Slot> {
        if self.team_1.is_none() {
            Some(Slot::One)
        } else if self.team_2.is_none() {
            Some(Slot::Two)
        } else {
            None
        }
    }

    pub fn set_team(&mut self, slot: Slot, team: Option<TeamId>) {
        match slot {
            Slot::One => self.team_1 = team,
            Slot::Two => self.team_2 = team,
        }
    }

    /// Record both scores and decide winner/loser. Equal scores clear the decision.
    pub fn record_score(&mut self, team_1_score: u32, team_2_score: u32) {
        self.team_1_score = Some(team_1_score);
        self.team_2_score = Some(team_2_score);
        let (winner, loser) = match team_1_score.cmp(&team_2_score) {
            std::cmp::Ordering::Greater => (self.team_1, self.team_2),
            std::cmp::Ordering::Less => (self.team_2, self.team_1),
            std::cmp::Ordering::Equal => (None, None),
        };
        self.winner = winner;
        self.loser = loser;
    }
}
