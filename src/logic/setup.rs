//! Tournament creation: validate the entry list and generate the full
//! initial schedule for the chosen format.

use crate::logic::fixtures::{generate_knockout_fixtures, generate_league_fixtures};
use crate::logic::groups::generate_group_fixtures;
use crate::logic::knockout::settle_walkovers;
use crate::models::{
    Participant, Stage, Tournament, TournamentError, TournamentStatus, TournamentType,
};
use chrono::Utc;
use uuid::Uuid;

/// Create a fully initialized, Active tournament.
///
/// Entry order is preserved. At least 2 non-blank names are required;
/// names are unique case-insensitively. Fixtures are generated up front:
/// the whole schedule for league and knockout, the group stage only for
/// groups+knockout (the bracket is appended later by the stage
/// transition). `has_two_legs` applies to the knockout format only and
/// is ignored elsewhere.
pub fn create_tournament(
    name: impl Into<String>,
    kind: TournamentType,
    participant_names: &[String],
    has_two_legs: bool,
) -> Result<Tournament, TournamentError> {
    let trimmed: Vec<&str> = participant_names.iter().map(|n| n.trim()).collect();
    if trimmed.iter().any(|n| n.is_empty()) {
        return Err(TournamentError::BlankParticipantName);
    }
    if trimmed.len() < 2 {
        return Err(TournamentError::NotEnoughParticipants);
    }
    for (i, n) in trimmed.iter().enumerate() {
        if trimmed[..i].iter().any(|m| m.eq_ignore_ascii_case(n)) {
            return Err(TournamentError::DuplicateParticipantName);
        }
    }

    let mut participants: Vec<Participant> = trimmed.into_iter().map(Participant::new).collect();
    let id = Uuid::new_v4();
    let has_two_legs = has_two_legs && kind == TournamentType::Knockout;

    let (fixtures, stage) = match kind {
        TournamentType::League => (generate_league_fixtures(&participants, id), None),
        TournamentType::Knockout => (
            generate_knockout_fixtures(&participants, id, has_two_legs),
            None,
        ),
        TournamentType::GroupsKnockout => {
            let draw = generate_group_fixtures(&participants, id);
            participants = draw.participants;
            (draw.fixtures, Some(Stage::GroupStage))
        }
    };

    log::info!(
        "created tournament {id} ({:?}, {} participants, {} fixtures)",
        kind,
        participants.len(),
        fixtures.len()
    );

    let mut tournament = Tournament {
        id,
        name: name.into(),
        kind,
        participants,
        fixtures,
        status: TournamentStatus::Active,
        stage,
        has_two_legs,
        created_at: Utc::now(),
    };
    if tournament.in_bracket_play() {
        settle_walkovers(&mut tournament);
    }
    Ok(tournament)
}
