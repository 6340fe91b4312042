//! Participant and ParticipantStats data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in fixtures and lookups).
pub type ParticipantId = Uuid;

/// Table statistics for a participant. Derived data: recomputed wholesale
/// by the standings calculator from match history, never edited by hand.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParticipantStats {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub gf: u32,
    pub ga: u32,
    pub points: u32,
}

impl ParticipantStats {
    /// Goal difference (can be negative).
    pub fn goal_difference(&self) -> i64 {
        i64::from(self.gf) - i64::from(self.ga)
    }
}

/// A participant in the tournament (a player or a team; this is a 1-vs-1
/// model, so goal scorers are participants themselves).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Group label ('A', 'B', ...). Set only for the group stage of a
    /// groups+knockout tournament.
    pub group_id: Option<char>,
    pub stats: ParticipantStats,
}

impl Participant {
    /// Create a new participant with the given name and zeroed stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            group_id: None,
            stats: ParticipantStats::default(),
        }
    }
}
