//! Tournament, its format/status/stage enums, and TournamentError.

use crate::models::fixture::{Fixture, MatchId};
use crate::models::participant::{Participant, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Fewer than 2 participants at creation.
    NotEnoughParticipants,
    /// A participant name is empty (after trimming).
    BlankParticipantName,
    /// Two participants share a name (names are unique, case-insensitive).
    DuplicateParticipantName,
    /// Match id not found in the tournament's fixtures.
    MatchNotFound(MatchId),
    /// The match already has a result; results are written once.
    MatchAlreadyPlayed(MatchId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEnoughParticipants => {
                write!(f, "Need at least 2 participants")
            }
            TournamentError::BlankParticipantName => {
                write!(f, "Participant names cannot be blank")
            }
            TournamentError::DuplicateParticipantName => {
                write!(f, "A participant with this name already exists")
            }
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::MatchAlreadyPlayed(_) => {
                write!(f, "This match already has a result")
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Tournament format.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentType {
    /// Single round-robin; winner by points.
    League,
    /// Single-elimination bracket, optionally two-legged ties.
    Knockout,
    /// Group stage (round-robin per group) feeding a knockout bracket.
    GroupsKnockout,
}

/// Whether the tournament is still being played. Monotonic: once
/// Completed, never reverts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    #[default]
    Active,
    Completed,
}

/// Phase of a groups+knockout tournament. One-way transition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    GroupStage,
    KnockoutStage,
}

/// Full tournament state: participants, fixtures, format and progress.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TournamentType,
    /// Ordered list; ids unique. Bye entries used during fixture
    /// generation never appear here.
    pub participants: Vec<Participant>,
    /// Flat, append-only list of matches. Progression and the stage
    /// transition only ever append; no match is deleted.
    pub fixtures: Vec<Fixture>,
    pub status: TournamentStatus,
    /// Only meaningful for GroupsKnockout.
    pub stage: Option<Stage>,
    /// Knockout-only option: each bracket tie is played over two legs,
    /// aggregate score decides advancement.
    pub has_two_legs: bool,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Look up a participant by id.
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Look up a fixture by match id.
    pub fn fixture(&self, id: MatchId) -> Option<&Fixture> {
        self.fixtures.iter().find(|m| m.id == id)
    }

    pub fn fixture_mut(&mut self, id: MatchId) -> Option<&mut Fixture> {
        self.fixtures.iter_mut().find(|m| m.id == id)
    }

    /// True while knockout progression applies: a knockout tournament, or
    /// a groups+knockout tournament that has reached its knockout stage.
    pub fn in_bracket_play(&self) -> bool {
        match self.kind {
            TournamentType::Knockout => true,
            TournamentType::GroupsKnockout => self.stage == Some(Stage::KnockoutStage),
            TournamentType::League => false,
        }
    }

    /// Distinct group labels present among participants, sorted.
    pub fn group_labels(&self) -> Vec<char> {
        let mut labels: Vec<char> = self.participants.iter().filter_map(|p| p.group_id).collect();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}
