//! Tournament engine: fixture generation, standings, knockout
//! progression, stage transition, completion.

mod completion;
mod fixtures;
mod groups;
mod knockout;
mod results;
mod rounds;
mod setup;
mod standings;

pub use completion::check_completion;
pub use fixtures::{generate_knockout_fixtures, generate_league_fixtures, knockout_round_name};
pub use groups::{
    advance_group_stage, generate_group_fixtures, group_fixtures, group_participants, GroupDraw,
};
pub use knockout::progress_knockout;
pub use results::{record_result, submit_match_result};
pub use rounds::{round_ties, Tie};
pub use setup::create_tournament;
pub use standings::{compute_standings, top_scorers, ScorerRow};
