//! Football tournament web app: library with models, the scheduling and
//! progression engine, and the persistence collaborator.

pub mod logic;
pub mod models;
pub mod storage;

pub use logic::{
    advance_group_stage, check_completion, compute_standings, create_tournament,
    generate_group_fixtures, generate_knockout_fixtures, generate_league_fixtures,
    group_fixtures, group_participants, knockout_round_name, progress_knockout, record_result,
    round_ties, submit_match_result, top_scorers, GroupDraw, ScorerRow, Tie,
};
pub use models::{
    Fixture, MatchId, Participant, ParticipantId, ParticipantStats, ScorerEntry, Stage,
    Tournament, TournamentError, TournamentId, TournamentStatus, TournamentType,
};
pub use storage::{JsonFileStore, TournamentStore};
