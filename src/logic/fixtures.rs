//! Fixture generation: round-robin league schedules and single-elimination
//! knockout brackets.

use crate::models::{Fixture, Participant, ParticipantId, TournamentId};
use uuid::Uuid;

/// A seat during fixture generation: a real participant or a synthetic
/// bye. Byes exist only while generating; a bye that ends up in a
/// walkover fixture is materialized as a fresh id that never joins the
/// tournament's participant list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Slot {
    Real(ParticipantId),
    Bye,
}

/// Human name for a knockout round with `tie_count` ties.
pub fn knockout_round_name(tie_count: usize) -> String {
    match tie_count {
        1 => "Final".to_string(),
        2 => "Semi-Final".to_string(),
        4 => "Quarter-Final".to_string(),
        n => format!("Round of {}", 2 * n),
    }
}

/// Generate a single round-robin using the circle (Berger) method.
///
/// Seats all entries around a circle; each of n-1 rounds pairs seat i
/// with seat n-1-i, then every seat but the first rotates by one. An odd
/// participant count gets a ghost seat; its pairings are bye rounds and
/// produce no match. Home advantage of the two circle endpoints
/// alternates with round parity.
pub fn generate_league_fixtures(
    participants: &[Participant],
    tournament_id: TournamentId,
) -> Vec<Fixture> {
    let mut seats: Vec<Slot> = participants.iter().map(|p| Slot::Real(p.id)).collect();
    if seats.len() % 2 != 0 {
        seats.push(Slot::Bye);
    }

    let n = seats.len();
    let mut fixtures = Vec::new();
    if n < 2 {
        return fixtures;
    }

    for round in 0..n - 1 {
        for i in 0..n / 2 {
            if let (Slot::Real(a), Slot::Real(b)) = (seats[i], seats[n - 1 - i]) {
                // Alternate home/away by round parity to balance venues.
                let a_home = if round % 2 == 0 { i == 0 } else { i != 0 };
                let (home, away) = if a_home { (a, b) } else { (b, a) };
                let matchday = round as u32 + 1;
                fixtures.push(Fixture::new(
                    tournament_id,
                    home,
                    away,
                    matchday,
                    format!("Matchday {matchday}"),
                ));
            }
        }
        // Rotate: last seat moves to position 1, first seat stays fixed.
        if let Some(last) = seats.pop() {
            seats.insert(1, last);
        }
    }

    fixtures
}

/// Generate round 1 of a single-elimination bracket.
///
/// The bracket is padded to the next power of two with byes. Real
/// participants pair adjacently in entry order (no seeding); each bye is
/// placed against one of the trailing participants, so a bye never meets
/// a bye. Bye ties are resolved at generation time as a 1-0 walkover for
/// the real side, even when `has_two_legs` is set (a walkover needs no
/// second leg). Real ties emit one match, or two with reversed venues
/// when `has_two_legs` is set.
pub fn generate_knockout_fixtures(
    participants: &[Participant],
    tournament_id: TournamentId,
    has_two_legs: bool,
) -> Vec<Fixture> {
    let n = participants.len();
    if n < 2 {
        return Vec::new();
    }

    let tie_count = n.next_power_of_two() / 2;
    // Ties drawn with two real entrants; the trailing ties get one bye each.
    let full_ties = n - tie_count;
    let base_name = knockout_round_name(tie_count);

    let mut fixtures = Vec::new();
    let mut entry = 0;
    for slot in 0..tie_count as u32 {
        let home = Slot::Real(participants[entry].id);
        let away = if (slot as usize) < full_ties {
            entry += 2;
            Slot::Real(participants[entry - 1].id)
        } else {
            entry += 1;
            Slot::Bye
        };
        fixtures.extend(tie_fixtures(
            tournament_id,
            home,
            away,
            1,
            slot,
            &base_name,
            has_two_legs,
        ));
    }

    fixtures
}

/// Build the match(es) for one knockout tie at `(round, slot)`.
///
/// Also used by the progression engine when appending the next round, so
/// leg labeling and walkover handling stay in one place.
pub(crate) fn tie_fixtures(
    tournament_id: TournamentId,
    home: Slot,
    away: Slot,
    round: u32,
    slot: u32,
    base_name: &str,
    has_two_legs: bool,
) -> Vec<Fixture> {
    match (home, away) {
        (Slot::Real(h), Slot::Real(a)) => {
            if has_two_legs {
                vec![
                    Fixture::new(tournament_id, h, a, round, format!("{base_name} - Leg 1"))
                        .with_slot(slot),
                    Fixture::new(tournament_id, a, h, round, format!("{base_name} - Leg 2"))
                        .with_slot(slot),
                ]
            } else {
                vec![Fixture::new(tournament_id, h, a, round, base_name).with_slot(slot)]
            }
        }
        // Walkover: the real side wins 1-0 with no user interaction. The
        // bye side is a throwaway id outside the participant list.
        (Slot::Real(h), Slot::Bye) => {
            vec![Fixture::new(tournament_id, h, Uuid::new_v4(), round, base_name)
                .with_slot(slot)
                .with_result(1, 0)]
        }
        (Slot::Bye, Slot::Real(a)) => {
            vec![Fixture::new(tournament_id, Uuid::new_v4(), a, round, base_name)
                .with_slot(slot)
                .with_result(0, 1)]
        }
        // Cannot be drawn (byes never outnumber real entrants), but a
        // bye-only tie has nothing to schedule.
        (Slot::Bye, Slot::Bye) => Vec::new(),
    }
}
