//! Match-result submission: the fixed pipeline a recorded score runs
//! through before the tournament is handed back for persistence.

use crate::logic::completion::check_completion;
use crate::logic::groups::advance_group_stage;
use crate::logic::knockout::progress_knockout;
use crate::models::{MatchId, ScorerEntry, Tournament, TournamentError};

/// Write a final score onto an unplayed match.
///
/// `scorers` is the optional per-participant goal breakdown for the
/// leaderboard; when absent, the two team totals are credited to the two
/// sides. Zero-goal entries are never stored. Fails without mutation if
/// the match id is unknown or the match already has a result (results
/// are written exactly once).
pub fn record_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    home_score: u32,
    away_score: u32,
    scorers: Option<Vec<ScorerEntry>>,
) -> Result<(), TournamentError> {
    let Some(m) = tournament.fixture_mut(match_id) else {
        return Err(TournamentError::MatchNotFound(match_id));
    };
    if m.is_played {
        return Err(TournamentError::MatchAlreadyPlayed(match_id));
    }

    let scorers = scorers.unwrap_or_else(|| {
        vec![
            ScorerEntry {
                participant_id: m.home_id,
                goals: home_score,
            },
            ScorerEntry {
                participant_id: m.away_id,
                goals: away_score,
            },
        ]
    });

    m.home_score = Some(home_score);
    m.away_score = Some(away_score);
    m.scorers = scorers.into_iter().filter(|s| s.goals > 0).collect();
    m.is_played = true;
    Ok(())
}

/// Record a result and run the full follow-up pipeline: knockout
/// progression, group-to-knockout transition, completion check. The
/// caller persists the tournament afterwards; nothing here touches
/// storage.
pub fn submit_match_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    home_score: u32,
    away_score: u32,
    scorers: Option<Vec<ScorerEntry>>,
) -> Result<(), TournamentError> {
    record_result(tournament, match_id, home_score, away_score, scorers)?;
    progress_knockout(tournament, match_id);
    advance_group_stage(tournament);
    check_completion(tournament);
    Ok(())
}
