//! Derived round/tie view of a tournament's flat fixture list.
//!
//! A tie is the full pairing between two participants within one
//! knockout round: one match, or two legs. Ties are identified by the
//! bracket slot stamped on their fixtures at creation, so pairing never
//! depends on fixture array order.

use crate::models::{Fixture, MatchId, ParticipantId};

/// One knockout tie: up to two legs between a fixed pair of sides.
#[derive(Clone, Debug)]
pub struct Tie {
    pub slot: u32,
    /// First-leg home side (the tie's first-encountered participant).
    pub home: ParticipantId,
    pub away: ParticipantId,
    pub match_ids: Vec<MatchId>,
    /// Aggregate goals from the fixed perspective of `home` / `away`.
    pub home_goals: u32,
    pub away_goals: u32,
    /// True when every leg of the tie has been played.
    pub complete: bool,
}

impl Tie {
    /// The advancing side. Higher aggregate wins; an aggregate draw falls
    /// back to the first-leg home side (no extra time or penalties are
    /// modeled).
    pub fn winner(&self) -> ParticipantId {
        if self.away_goals > self.home_goals {
            return self.away;
        }
        if self.complete && self.away_goals == self.home_goals {
            log::warn!(
                "tie at slot {} drawn {}-{} on aggregate; first-leg home side advances",
                self.slot,
                self.home_goals,
                self.away_goals
            );
        }
        self.home
    }
}

/// All ties of one knockout round, ordered by slot.
///
/// Fixtures without a bracket slot are ignored: every knockout fixture is
/// stamped at creation, so a slotless one in a knockout round is
/// structurally inconsistent data and progression must not guess.
pub fn round_ties(fixtures: &[Fixture], round_order: u32) -> Vec<Tie> {
    let mut ties: Vec<Tie> = Vec::new();

    for m in fixtures.iter().filter(|m| m.round_order == round_order) {
        let Some(slot) = m.bracket_slot else {
            continue;
        };
        let tie = match ties.iter_mut().find(|t| t.slot == slot) {
            Some(t) => t,
            None => {
                ties.push(Tie {
                    slot,
                    home: m.home_id,
                    away: m.away_id,
                    match_ids: Vec::new(),
                    home_goals: 0,
                    away_goals: 0,
                    complete: true,
                });
                ties.last_mut().unwrap()
            }
        };

        tie.match_ids.push(m.id);
        tie.complete &= m.is_played;
        if let Some(g) = m.goals_for(tie.home) {
            tie.home_goals = tie.home_goals.saturating_add(g);
        }
        if let Some(g) = m.goals_for(tie.away) {
            tie.away_goals = tie.away_goals.saturating_add(g);
        }
    }

    ties.sort_by_key(|t| t.slot);
    ties
}
