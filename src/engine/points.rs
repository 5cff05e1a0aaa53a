//! Fantasy points for one player's fixture or gameweek record.
//!
//! Captaincy is not applied here; see [`crate::engine::squad`].

use serde::Serialize;

use crate::cli::types::Position;
use crate::engine::rules::{ScoringRules, StatEvent};
use crate::models::PlayerStatRecord;


/// Points per scoring component. Components can be negative; only the total
/// is floored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub minutes: i32,
    pub goals_scored: i32,
    pub assists: i32,
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub saves: i32,
    pub penalties_saved: i32,
    pub penalties_missed: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub own_goals: i32,
    pub defensive_contribution: i32,
    pub bonus: i32,
}

impl PointsBreakdown {
    /// Sum of every component before bonus, saturating at the `i32` bounds.
    pub fn base(&self) -> i32 {
        [
            self.minutes,
            self.goals_scored,
            self.assists,
            self.clean_sheets,
            self.goals_conceded,
            self.saves,
            self.penalties_saved,
            self.penalties_missed,
            self.yellow_cards,
            self.red_cards,
            self.own_goals,
            self.defensive_contribution,
        ]
        .into_iter()
        .fold(0, i32::saturating_add)
    }

    /// Unfloored sum including bonus.
    pub fn raw_total(&self) -> i32 {
        self.base().saturating_add(self.bonus)
    }

    /// Final player total, never below 0.
    pub fn total(&self) -> i32 {
        self.raw_total().max(0)
    }

    fn slot_mut(&mut self, event: StatEvent) -> &mut i32 {
        match event {
            StatEvent::Minutes => &mut self.minutes,
            StatEvent::GoalScored => &mut self.goals_scored,
            StatEvent::Assist => &mut self.assists,
            StatEvent::CleanSheet => &mut self.clean_sheets,
            StatEvent::GoalsConceded => &mut self.goals_conceded,
            StatEvent::Saves => &mut self.saves,
            StatEvent::PenaltySaved => &mut self.penalties_saved,
            StatEvent::PenaltyMissed => &mut self.penalties_missed,
            StatEvent::YellowCard => &mut self.yellow_cards,
            StatEvent::RedCard => &mut self.red_cards,
            StatEvent::OwnGoal => &mut self.own_goals,
            StatEvent::DefensiveContribution => &mut self.defensive_contribution,
            StatEvent::Bonus => &mut self.bonus,
        }
    }
}

/// Score every component of a record for `position`.
///
/// A missing record is a player who did not play: every component is 0.
pub fn points_breakdown(
    rules: &ScoringRules,
    position: Position,
    record: Option<&PlayerStatRecord>,
) -> PointsBreakdown {
    let mut breakdown = PointsBreakdown::default();
    let Some(record) = record else {
        return breakdown;
    };

    for event in StatEvent::ALL {
        let count = event.count_in(position, record);
        *breakdown.slot_mut(event) = rules.points_for(position, event, count);
    }
    breakdown
}

/// Total points including whatever bonus the record carries, floored at 0.
pub fn total_points(
    rules: &ScoringRules,
    position: Position,
    record: Option<&PlayerStatRecord>,
) -> i32 {
    points_breakdown(rules, position, record).total()
}
