//! Knockout progression: after a bracket match is recorded, decide
//! whether two neighboring ties are settled and append the next round.

use crate::logic::fixtures::{knockout_round_name, tie_fixtures, Slot};
use crate::logic::rounds::round_ties;
use crate::models::{MatchId, Tournament};

/// Advance the bracket past `completed_match` if possible.
///
/// May append the next round's match(es) for the pair of ties containing
/// and neighboring the completed match. Safe to call repeatedly for the
/// same match: the next-round fixture is keyed by `(round + 1, slot / 2)`
/// and is never created twice. Every early return is a deliberate no-op:
/// not in bracket play, tie or neighbor not yet settled, or nothing above
/// this round (the final).
pub fn progress_knockout(tournament: &mut Tournament, completed_match: MatchId) {
    if !tournament.in_bracket_play() {
        return;
    }
    let Some(m) = tournament.fixture(completed_match) else {
        return;
    };
    // Group-stage fixtures (round 0) never feed the bracket directly.
    if m.round_order == 0 || !m.is_played {
        return;
    }
    let round = m.round_order;
    let Some(slot) = m.bracket_slot else {
        return;
    };

    let ties = round_ties(&tournament.fixtures, round);
    let Some(tie) = ties.iter().find(|t| t.slot == slot) else {
        return;
    };
    if !tie.complete {
        return;
    }

    // Ties pair up by slot: 0 with 1, 2 with 3, ...
    let Some(neighbor) = ties.iter().find(|t| t.slot == (slot ^ 1)) else {
        return;
    };
    if !neighbor.complete {
        return;
    }

    let next_round = round + 1;
    let next_slot = slot / 2;
    let exists = tournament
        .fixtures
        .iter()
        .any(|f| f.round_order == next_round && f.bracket_slot == Some(next_slot));
    if exists {
        return;
    }

    // The even slot's winner takes the home side of the next tie.
    let (first, second) = if slot % 2 == 0 {
        (tie, neighbor)
    } else {
        (neighbor, tie)
    };
    let name = knockout_round_name(ties.len() / 2);
    let two_legs = tournament.has_two_legs;
    let created = tie_fixtures(
        tournament.id,
        Slot::Real(first.winner()),
        Slot::Real(second.winner()),
        next_round,
        next_slot,
        &name,
        two_legs,
    );
    log::debug!(
        "advancing bracket: slots {} and {} of round {} settled, created {} fixture(s) in round {}",
        first.slot,
        second.slot,
        round,
        created.len(),
        next_round
    );
    tournament.fixtures.extend(created);
}

/// Run progression for every already-played bracket fixture.
///
/// Walkovers are born played and never pass through result submission,
/// so a freshly created bracket can hold a neighboring pair of settled
/// ties that no submission would ever advance (two byes land in adjacent
/// slots whenever the bye count is 2 or more). Called once whenever a
/// bracket round comes into existence; idempotent like the progression
/// it drives.
pub(crate) fn settle_walkovers(tournament: &mut Tournament) {
    loop {
        let before = tournament.fixtures.len();
        let played: Vec<MatchId> = tournament
            .fixtures
            .iter()
            .filter(|m| m.round_order > 0 && m.is_played)
            .map(|m| m.id)
            .collect();
        for id in played {
            progress_knockout(tournament, id);
        }
        if tournament.fixtures.len() == before {
            break;
        }
    }
}
