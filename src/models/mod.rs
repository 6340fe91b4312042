//! Data structures for the tournament: participants, fixtures, tournament state.

mod fixture;
mod participant;
mod tournament;

pub use fixture::{Fixture, MatchId, ScorerEntry};
pub use participant::{Participant, ParticipantId, ParticipantStats};
pub use tournament::{
    Stage, Tournament, TournamentError, TournamentId, TournamentStatus, TournamentType,
};
