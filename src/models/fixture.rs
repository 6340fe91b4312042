//! Fixture (a scheduled match between two participants) and scorer entries.

use crate::models::participant::ParticipantId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Goals credited to one participant in one match, for the scorer
/// leaderboard. `goals` is always > 0; zero entries are never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScorerEntry {
    pub participant_id: ParticipantId,
    pub goals: u32,
}

/// A single scheduled match. Scores are both `None` until the match is
/// played; they are written together, exactly once.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub home_id: ParticipantId,
    pub away_id: ParticipantId,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
    pub is_played: bool,
    /// Human label, e.g. "Matchday 1", "Semi-Final", "Group A - Matchday 2".
    pub round_name: String,
    /// Groups fixtures into rounds. Group-stage matches use 0; knockout
    /// rounds start at 1 and increase.
    pub round_order: u32,
    /// Slot of this match's tie in a balanced binary bracket, assigned at
    /// bracket creation. `None` for league and group-stage matches.
    pub bracket_slot: Option<u32>,
    pub scorers: Vec<ScorerEntry>,
}

impl Fixture {
    pub fn new(
        tournament_id: TournamentId,
        home_id: ParticipantId,
        away_id: ParticipantId,
        round_order: u32,
        round_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            home_id,
            away_id,
            home_score: None,
            away_score: None,
            is_played: false,
            round_name: round_name.into(),
            round_order,
            bracket_slot: None,
            scorers: Vec::new(),
        }
    }

    /// Attach a bracket slot (knockout fixtures only).
    pub fn with_slot(mut self, slot: u32) -> Self {
        self.bracket_slot = Some(slot);
        self
    }

    /// Mark the fixture as played with the given result (used for bye
    /// walkovers at generation time).
    pub fn with_result(mut self, home_score: u32, away_score: u32) -> Self {
        self.home_score = Some(home_score);
        self.away_score = Some(away_score);
        self.is_played = true;
        self
    }

    /// Goals scored by `participant` in this match, from the recorded
    /// score. `None` if the match is unplayed or the participant is not
    /// one of the two sides.
    pub fn goals_for(&self, participant: ParticipantId) -> Option<u32> {
        if participant == self.home_id {
            self.home_score
        } else if participant == self.away_id {
            self.away_score
        } else {
            None
        }
    }
}
