//! Integration tests for groups+knockout tournaments: the group draw,
//! the stage transition, and the knockout phase that follows.

use football_tournament_web::{
    advance_group_stage, create_tournament, group_participants, submit_match_result, Stage,
    Tournament, TournamentStatus, TournamentType,
};
use std::collections::HashSet;

fn hybrid(n: usize) -> Tournament {
    let names: Vec<String> = (0..n).map(|i| format!("P{i}")).collect();
    create_tournament("World Cup", TournamentType::GroupsKnockout, &names, false).unwrap()
}

/// Record every currently unplayed group-stage fixture as a home win.
fn play_out_group_stage(t: &mut Tournament) {
    let pending: Vec<_> = t
        .fixtures
        .iter()
        .filter(|m| m.round_order == 0 && !m.is_played)
        .map(|m| m.id)
        .collect();
    for id in pending {
        submit_match_result(t, id, 2, 0, None).unwrap();
    }
}

#[test]
fn eight_players_are_drawn_into_two_groups_of_four() {
    let t = hybrid(8);
    assert_eq!(t.stage, Some(Stage::GroupStage));
    assert_eq!(t.group_labels(), vec!['A', 'B']);
    assert_eq!(group_participants(&t, 'A').len(), 4);
    assert_eq!(group_participants(&t, 'B').len(), 4);

    // 2 groups of 4 -> 6 round-robin matches each, all at round order 0.
    assert_eq!(t.fixtures.len(), 12);
    for m in &t.fixtures {
        assert_eq!(m.round_order, 0);
        assert!(m.bracket_slot.is_none());
        let prefix_ok =
            m.round_name.starts_with("Group A - ") || m.round_name.starts_with("Group B - ");
        assert!(prefix_ok, "unexpected round name {}", m.round_name);
    }
}

#[test]
fn group_matches_stay_inside_their_group() {
    let t = hybrid(12); // 4 groups of 3
    assert_eq!(t.group_labels(), vec!['A', 'B', 'C', 'D']);
    for m in &t.fixtures {
        let home = t.participant(m.home_id).unwrap();
        let away = t.participant(m.away_id).unwrap();
        assert_eq!(home.group_id, away.group_id);
    }
}

#[test]
fn transition_waits_for_the_full_group_stage() {
    let mut t = hybrid(8);
    let first = t.fixtures[0].id;
    submit_match_result(&mut t, first, 1, 0, None).unwrap();

    assert_eq!(t.stage, Some(Stage::GroupStage));
    assert!(!advance_group_stage(&mut t));
    assert_eq!(t.fixtures.len(), 12);
}

#[test]
fn finished_group_stage_produces_a_semi_final_bracket() {
    let mut t = hybrid(8);
    let group_fixture_ids: Vec<_> = t.fixtures.iter().map(|m| m.id).collect();
    play_out_group_stage(&mut t);

    // The last group result triggered the transition inside the pipeline.
    assert_eq!(t.stage, Some(Stage::KnockoutStage));
    let semis: Vec<_> = t.fixtures.iter().filter(|m| m.round_order == 1).collect();
    assert_eq!(semis.len(), 2);
    for m in &semis {
        assert_eq!(m.round_name, "Semi-Final");
    }

    // Qualifiers: top 2 per group, 4 distinct participants.
    let in_bracket: HashSet<_> = semis
        .iter()
        .flat_map(|m| [m.home_id, m.away_id])
        .collect();
    assert_eq!(in_bracket.len(), 4);
    for id in &in_bracket {
        assert!(t.participant(*id).is_some());
    }

    // Group fixtures are still there, untouched.
    for id in group_fixture_ids {
        let m = t.fixture(id).unwrap();
        assert_eq!(m.round_order, 0);
        assert!(m.is_played);
    }

    // Group stage completion never ends the tournament by itself.
    assert_eq!(t.status, TournamentStatus::Active);
}

#[test]
fn transition_fires_at_most_once() {
    let mut t = hybrid(8);
    play_out_group_stage(&mut t);
    let fixture_count = t.fixtures.len();

    assert!(!advance_group_stage(&mut t));
    assert_eq!(t.fixtures.len(), fixture_count);
    assert_eq!(t.stage, Some(Stage::KnockoutStage));
}

#[test]
fn hybrid_runs_to_completion_through_the_bracket() {
    let mut t = hybrid(8);
    play_out_group_stage(&mut t);

    // Play the semis, then the final the pipeline appends.
    for round in [1, 2] {
        let pending: Vec<_> = t
            .fixtures
            .iter()
            .filter(|m| m.round_order == round && !m.is_played)
            .map(|m| m.id)
            .collect();
        for id in pending {
            submit_match_result(&mut t, id, 1, 0, None).unwrap();
        }
    }

    assert_eq!(t.fixtures.iter().filter(|m| m.round_order == 2).count(), 1);
    assert_eq!(t.status, TournamentStatus::Completed);
}

#[test]
fn transition_settles_walkover_pairs_immediately() {
    // 24 entrants -> 6 groups -> 12 qualifiers, padded to a bracket of
    // 16 with 4 byes. The two all-walkover slot pairs must already have
    // their round-2 ties when the stage flips.
    let mut t = hybrid(24);
    play_out_group_stage(&mut t);
    assert_eq!(t.stage, Some(Stage::KnockoutStage));

    let round1: Vec<_> = t.fixtures.iter().filter(|m| m.round_order == 1).collect();
    assert_eq!(round1.len(), 8);
    assert_eq!(round1.iter().filter(|m| m.is_played).count(), 4);

    let round2: Vec<_> = t.fixtures.iter().filter(|m| m.round_order == 2).collect();
    assert_eq!(round2.len(), 2);
    let slots: HashSet<_> = round2.iter().map(|m| m.bracket_slot).collect();
    assert_eq!(slots, HashSet::from([Some(2), Some(3)]));
    assert!(round2.iter().all(|m| !m.is_played));

    // Those ties pair walkover winners, all real qualifiers.
    for m in &round2 {
        assert!(t.participant(m.home_id).is_some());
        assert!(t.participant(m.away_id).is_some());
    }
}

#[test]
fn tiny_field_still_gets_two_groups() {
    let t = hybrid(4);
    assert_eq!(t.group_labels(), vec!['A', 'B']);
    assert_eq!(group_participants(&t, 'A').len(), 2);
    assert_eq!(group_participants(&t, 'B').len(), 2);
    // One match per group of two.
    assert_eq!(t.fixtures.len(), 2);
}
