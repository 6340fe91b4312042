//! Group stage: drawing participants into groups, and the one-way
//! transition from group play into the knockout bracket.

use crate::logic::fixtures::{generate_knockout_fixtures, generate_league_fixtures};
use crate::logic::knockout::settle_walkovers;
use crate::logic::standings::compute_standings;
use crate::models::{Fixture, Participant, Stage, Tournament, TournamentId, TournamentType};
use rand::seq::SliceRandom;

/// Result of the group draw: participants stamped with their group label
/// and the full group-stage schedule.
#[derive(Clone, Debug)]
pub struct GroupDraw {
    pub participants: Vec<Participant>,
    pub fixtures: Vec<Fixture>,
}

/// Group count by participant total. Aims at groups of about 4; fewer
/// than 6 entrants still get 2 groups.
fn group_count(total: usize) -> usize {
    match total {
        0..=11 => 2,
        12..=23 => 4,
        24..=31 => 6,
        _ => 8,
    }
}

/// Draw groups and generate the group-stage schedule.
///
/// Participants are shuffled, seated round-robin (entry i into group
/// i mod count), and labeled 'A', 'B', ... in group order. Each group
/// plays its own round-robin; those fixtures get a "Group X - " name
/// prefix and round order 0, the order reserved for the group stage.
pub fn generate_group_fixtures(
    participants: &[Participant],
    tournament_id: TournamentId,
) -> GroupDraw {
    let mut pool = participants.to_vec();
    pool.shuffle(&mut rand::thread_rng());

    let count = group_count(pool.len());
    let mut groups: Vec<Vec<Participant>> = vec![Vec::new(); count];
    for (i, p) in pool.into_iter().enumerate() {
        groups[i % count].push(p);
    }

    let mut draw = GroupDraw {
        participants: Vec::new(),
        fixtures: Vec::new(),
    };
    for (i, group) in groups.iter_mut().enumerate() {
        let label = (b'A' + i as u8) as char;
        for p in group.iter_mut() {
            p.group_id = Some(label);
        }

        let mut fixtures = generate_league_fixtures(group, tournament_id);
        for m in &mut fixtures {
            m.round_name = format!("Group {} - {}", label, m.round_name);
            m.round_order = 0;
        }

        draw.participants.extend(group.iter().cloned());
        draw.fixtures.extend(fixtures);
    }
    draw
}

/// Fixtures belonging to one group: membership follows the home side's
/// group label.
pub fn group_fixtures<'a>(tournament: &'a Tournament, label: char) -> Vec<&'a Fixture> {
    tournament
        .fixtures
        .iter()
        .filter(|m| {
            tournament
                .participant(m.home_id)
                .is_some_and(|p| p.group_id == Some(label))
        })
        .collect()
}

/// Participants of one group, in participant-list order.
pub fn group_participants(tournament: &Tournament, label: char) -> Vec<Participant> {
    tournament
        .participants
        .iter()
        .filter(|p| p.group_id == Some(label))
        .cloned()
        .collect()
}

/// Move a groups+knockout tournament from its group stage into the
/// knockout stage once every group fixture is played.
///
/// Returns false (and changes nothing) unless the tournament is a hybrid
/// still in group play with its whole schedule played. On transition:
/// the top 2 of each group's standings qualify (a short group qualifies
/// entirely), groups taken in label order; the bracket for the
/// qualifiers is appended to the existing fixtures and the stage flips.
/// The stage flip makes this fire at most once.
pub fn advance_group_stage(tournament: &mut Tournament) -> bool {
    if tournament.kind != TournamentType::GroupsKnockout
        || tournament.stage != Some(Stage::GroupStage)
    {
        return false;
    }
    if tournament.fixtures.is_empty() || !tournament.fixtures.iter().all(|m| m.is_played) {
        return false;
    }

    let mut qualifiers: Vec<Participant> = Vec::new();
    for label in tournament.group_labels() {
        let members = group_participants(tournament, label);
        let matches: Vec<Fixture> = group_fixtures(tournament, label)
            .into_iter()
            .cloned()
            .collect();
        let table = compute_standings(&members, &matches);
        qualifiers.extend(table.into_iter().take(2));
    }

    let bracket = generate_knockout_fixtures(&qualifiers, tournament.id, tournament.has_two_legs);
    log::info!(
        "tournament {}: group stage complete, {} qualifiers drawn into a {}-match knockout round",
        tournament.id,
        qualifiers.len(),
        bracket.len()
    );
    tournament.fixtures.extend(bracket);
    tournament.stage = Some(Stage::KnockoutStage);
    settle_walkovers(tournament);
    true
}
