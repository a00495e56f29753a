//! Team data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in match slots and lookups).
pub type TeamId = Uuid;

/// A registered team. Immutable once created.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Member names in the order they were entered (may be empty).
    #[serde(default)]
    pub members: Vec<String>,
}

impl Team {
    /// Create a new team with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_members(name, Vec::new())
    }

    pub fn with_members(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members,
        }
    }
}
