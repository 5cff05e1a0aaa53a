//! Bonus Points System score for one player in one match.

use crate::cli::types::Position;
use crate::engine::rules::{BpsWeights, ScoringRules};
use crate::models::PlayerStatRecord;

/// Weighted BPS total for a player, clamped to `0..=u32::MAX`.
///
/// Saves and penalty saves only count for goalkeepers; clean sheet and
/// goals-conceded weights come from the per-position rows.
pub fn compute_bps(rules: &ScoringRules, position: Position, record: &PlayerStatRecord) -> u32 {
    let raw = raw_bps(rules.bps_weights(), position, record);
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

fn raw_bps(w: &BpsWeights, position: Position, r: &PlayerStatRecord) -> i64 {
    let mut terms = vec![
        (w.goal_scored, r.goals_scored),
        (w.assist, r.assists),
        (w.key_pass, r.key_passes),
        (w.successful_dribble, r.successful_dribbles),
        (w.penalty_won, r.penalties_won),
        (w.big_chance_created, r.big_chances_created),
        (w.clean_sheet.get(position), r.clean_sheets),
        (w.recovery, r.recoveries),
        (w.key_block, r.key_blocks),
        (w.interception, r.interceptions),
        (w.tackle, r.tackles),
        (w.clearance, r.clearances),
        (w.block, r.blocks),
        (w.own_goal, r.own_goals),
        (w.penalty_missed, r.penalties_missed),
        (w.yellow_card, r.yellow_cards),
        (w.red_card, r.red_cards),
        (w.goal_conceded.get(position), r.goals_conceded),
        (w.error_leading_to_goal, r.errors_leading_to_goal),
        (w.error_leading_to_attempt, r.errors_leading_to_attempt),
        (w.foul, r.fouls),
    ];

    if position == Position::Goalkeeper {
        terms.push((w.save, r.saves));
        terms.push((w.penalty_saved, r.penalties_saved));
    }

    // i32 * u32 always fits in i64; only the running sum can overflow
    terms
        .into_iter()
        .map(|(weight, count)| i64::from(weight) * i64::from(count))
        .fold(0, i64::saturating_add)
}
