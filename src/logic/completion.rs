//! Completion detection: flip a tournament to Completed under
//! format-specific terminal conditions. Status is monotonic.

use crate::models::{Stage, Tournament, TournamentStatus, TournamentType};

/// Check the tournament's fixtures and mark it Completed when its format
/// says so. No-op if already Completed (never reverts, even on stale
/// data).
///
/// League: every match played, schedule non-empty. Knockout (or a hybrid
/// in its knockout stage): the highest round present is fully played,
/// which covers single and two-legged finals. A hybrid still in group
/// play never completes here; it has a bracket to play first.
pub fn check_completion(tournament: &mut Tournament) {
    if tournament.status == TournamentStatus::Completed {
        return;
    }

    let done = match tournament.kind {
        TournamentType::League => {
            !tournament.fixtures.is_empty() && tournament.fixtures.iter().all(|m| m.is_played)
        }
        TournamentType::Knockout => final_round_played(tournament),
        TournamentType::GroupsKnockout => {
            tournament.stage == Some(Stage::KnockoutStage) && final_round_played(tournament)
        }
    };

    if done {
        log::info!("tournament {} ({}) completed", tournament.id, tournament.name);
        tournament.status = TournamentStatus::Completed;
    }
}

/// True when the highest round order present has all its matches played.
fn final_round_played(tournament: &Tournament) -> bool {
    let Some(last_round) = tournament.fixtures.iter().map(|m| m.round_order).max() else {
        return false;
    };
    tournament
        .fixtures
        .iter()
        .filter(|m| m.round_order == last_round)
        .all(|m| m.is_played)
}
