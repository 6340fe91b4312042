//! Standings table and top-scorer leaderboard. Both are pure functions
//! over (participants, fixtures); neither mutates its inputs.

use crate::models::{Fixture, Participant, ParticipantId};
use serde::Serialize;
use std::collections::HashMap;

/// Recompute the table from scratch and rank it.
///
/// Stats always start from zero, so calling this repeatedly never
/// compounds state. Every played match is folded exactly once: 3 points
/// for a win, 1 each for a draw. Matches referencing an id outside
/// `participants` (e.g. a bye walkover) contribute nothing. Ranking is
/// points, then goal difference, then goals for, descending; the sort is
/// stable beyond that.
pub fn compute_standings(participants: &[Participant], fixtures: &[Fixture]) -> Vec<Participant> {
    let mut table: Vec<Participant> = participants
        .iter()
        .map(|p| Participant {
            stats: Default::default(),
            ..p.clone()
        })
        .collect();
    let index: HashMap<ParticipantId, usize> =
        table.iter().enumerate().map(|(i, p)| (p.id, i)).collect();

    for m in fixtures.iter().filter(|m| m.is_played) {
        let (Some(&h), Some(&a)) = (index.get(&m.home_id), index.get(&m.away_id)) else {
            continue;
        };
        let (Some(hg), Some(ag)) = (m.home_score, m.away_score) else {
            continue;
        };

        // Scores come from callers unchecked; saturate rather than trust
        // the sum to stay in range.
        {
            let home = &mut table[h].stats;
            home.played += 1;
            home.gf = home.gf.saturating_add(hg);
            home.ga = home.ga.saturating_add(ag);
        }
        {
            let away = &mut table[a].stats;
            away.played += 1;
            away.gf = away.gf.saturating_add(ag);
            away.ga = away.ga.saturating_add(hg);
        }

        if hg > ag {
            table[h].stats.won += 1;
            table[h].stats.points += 3;
            table[a].stats.lost += 1;
        } else if hg < ag {
            table[a].stats.won += 1;
            table[a].stats.points += 3;
            table[h].stats.lost += 1;
        } else {
            table[h].stats.drawn += 1;
            table[h].stats.points += 1;
            table[a].stats.drawn += 1;
            table[a].stats.points += 1;
        }
    }

    table.sort_by(|a, b| {
        b.stats
            .points
            .cmp(&a.stats.points)
            .then(b.stats.goal_difference().cmp(&a.stats.goal_difference()))
            .then(b.stats.gf.cmp(&a.stats.gf))
    });
    table
}

/// One row of the top-scorer leaderboard.
#[derive(Clone, Debug, Serialize)]
pub struct ScorerRow {
    pub participant: Participant,
    pub goals: u32,
}

/// Aggregate goals per participant across all played matches' scorer
/// entries, descending. Participants with no goals are omitted; equal
/// totals keep participant-list order.
pub fn top_scorers(participants: &[Participant], fixtures: &[Fixture]) -> Vec<ScorerRow> {
    let mut totals: HashMap<ParticipantId, u32> = HashMap::new();
    for m in fixtures.iter().filter(|m| m.is_played) {
        for s in &m.scorers {
            let total = totals.entry(s.participant_id).or_insert(0);
            *total = total.saturating_add(s.goals);
        }
    }

    let mut rows: Vec<ScorerRow> = participants
        .iter()
        .filter_map(|p| {
            totals.get(&p.id).filter(|&&g| g > 0).map(|&g| ScorerRow {
                participant: p.clone(),
                goals: g,
            })
        })
        .collect();
    rows.sort_by(|a, b| b.goals.cmp(&a.goals));
    rows
}
