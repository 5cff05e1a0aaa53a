//! Scoring weights and the per-event point lookup.
//!
//! Weights are data, not constants: a season's table is loaded (built-in or
//! from JSON), wrapped in [`ScoringRules`] and handed to every calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

use crate::cli::types::{Position, Season};
use crate::error::{Result, ScoringError};
use crate::models::PlayerStatRecord;

#[cfg(test)]
mod tests;

/// One integer value per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPoints {
    pub goalkeeper: i32,
    pub defender: i32,
    pub midfielder: i32,
    pub forward: i32,
}

impl PositionPoints {
    pub const fn new(goalkeeper: i32, defender: i32, midfielder: i32, forward: i32) -> Self {
        Self {
            goalkeeper,
            defender,
            midfielder,
            forward,
        }
    }

    pub fn get(&self, position: Position) -> i32 {
        match position {
            Position::Goalkeeper => self.goalkeeper,
            Position::Defender => self.defender,
            Position::Midfielder => self.midfielder,
            Position::Forward => self.forward,
        }
    }
}

/// Appearance points: `played` for any minutes, `long_appearance` on top once
/// `long_appearance_minutes` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceWeights {
    pub played: i32,
    pub long_appearance: i32,
    pub long_appearance_minutes: u32,
}

/// Threshold award for defensive work (introduced 2025/26).
///
/// Defenders count clearances, blocks, interceptions and tackles; midfielders
/// and forwards also count recoveries. Goalkeepers never qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveContributionWeights {
    pub points: i32,
    pub defender_threshold: u32,
    pub outfield_threshold: u32,
}

/// Per-unit Bonus Points System weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BpsWeights {
    pub goal_scored: i32,
    pub assist: i32,
    pub key_pass: i32,
    pub successful_dribble: i32,
    pub penalty_won: i32,
    pub big_chance_created: i32,
    pub clean_sheet: PositionPoints,
    /// Goalkeepers only.
    pub save: i32,
    /// Goalkeepers only.
    pub penalty_saved: i32,
    pub recovery: i32,
    pub key_block: i32,
    pub interception: i32,
    pub tackle: i32,
    pub clearance: i32,
    pub block: i32,
    pub own_goal: i32,
    pub penalty_missed: i32,
    pub yellow_card: i32,
    pub red_card: i32,
    pub goal_conceded: PositionPoints,
    pub error_leading_to_goal: i32,
    pub error_leading_to_attempt: i32,
    pub foul: i32,
}

impl Default for BpsWeights {
    fn default() -> Self {
        Self {
            goal_scored: 24,
            assist: 18,
            key_pass: 1,
            successful_dribble: 1,
            penalty_won: 9,
            big_chance_created: 3,
            clean_sheet: PositionPoints::new(12, 12, 6, 0),
            save: 2,
            penalty_saved: 15,
            recovery: 1,
            key_block: 1,
            interception: 1,
            tackle: 2,
            clearance: 1,
            block: 1,
            own_goal: -6,
            penalty_missed: -6,
            yellow_card: -3,
            red_card: -9,
            goal_conceded: PositionPoints::new(-4, -4, 0, 0),
            error_leading_to_goal: -4,
            error_leading_to_attempt: -1,
            foul: -1,
        }
    }
}

/// A season's full scoring table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub season: Season,
    pub appearance: AppearanceWeights,
    pub goal_scored: PositionPoints,
    pub assist: i32,
    pub clean_sheet: PositionPoints,
    /// Points per `goals_conceded_per` goals conceded.
    pub goals_conceded: PositionPoints,
    pub goals_conceded_per: u32,
    /// Goalkeeper points per `saves_per` saves.
    pub saves: i32,
    pub saves_per: u32,
    pub penalty_saved: i32,
    pub penalty_missed: i32,
    pub yellow_card: i32,
    pub red_card: i32,
    pub own_goal: i32,
    #[serde(default)]
    pub defensive_contribution: Option<DefensiveContributionWeights>,
    #[serde(default)]
    pub bps: BpsWeights,
}

impl ScoringWeights {
    /// The 2025/26 ruleset, including the defensive contribution award.
    pub fn season_2025_26() -> Self {
        Self {
            season: Season::new(2025),
            defensive_contribution: Some(DefensiveContributionWeights {
                points: 2,
                defender_threshold: 10,
                outfield_threshold: 12,
            }),
            ..Self::season_2024_25()
        }
    }

    pub fn season_2024_25() -> Self {
        Self {
            season: Season::new(2024),
            appearance: AppearanceWeights {
                played: 1,
                long_appearance: 1,
                long_appearance_minutes: 60,
            },
            goal_scored: PositionPoints::new(6, 6, 5, 4),
            assist: 3,
            clean_sheet: PositionPoints::new(4, 4, 1, 0),
            goals_conceded: PositionPoints::new(-1, -1, 0, 0),
            goals_conceded_per: 2,
            saves: 1,
            saves_per: 3,
            penalty_saved: 5,
            penalty_missed: -2,
            yellow_card: -1,
            red_card: -3,
            own_goal: -2,
            defensive_contribution: None,
            bps: BpsWeights::default(),
        }
    }

    /// Built-in table for a season.
    pub fn builtin(season: Season) -> Result<Self> {
        match season.start_year() {
            2025 => Ok(Self::season_2025_26()),
            2024 => Ok(Self::season_2024_25()),
            _ => Err(ScoringError::UnknownSeason {
                season: season.to_string(),
            }),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Scoring events a point value can be looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatEvent {
    /// Count is minutes played.
    Minutes,
    GoalScored,
    Assist,
    CleanSheet,
    /// Count is goals conceded; scored per block of `goals_conceded_per`.
    GoalsConceded,
    /// Count is saves; scored per block of `saves_per`.
    Saves,
    PenaltySaved,
    PenaltyMissed,
    YellowCard,
    RedCard,
    OwnGoal,
    /// Count is the position's defensive action total.
    DefensiveContribution,
    Bonus,
}

impl StatEvent {
    pub const ALL: [StatEvent; 13] = [
        StatEvent::Minutes,
        StatEvent::GoalScored,
        StatEvent::Assist,
        StatEvent::CleanSheet,
        StatEvent::GoalsConceded,
        StatEvent::Saves,
        StatEvent::PenaltySaved,
        StatEvent::PenaltyMissed,
        StatEvent::YellowCard,
        StatEvent::RedCard,
        StatEvent::OwnGoal,
        StatEvent::DefensiveContribution,
        StatEvent::Bonus,
    ];

    /// Stat-record field name for the event.
    pub fn name(&self) -> &'static str {
        match self {
            StatEvent::Minutes => "minutes",
            StatEvent::GoalScored => "goals_scored",
            StatEvent::Assist => "assists",
            StatEvent::CleanSheet => "clean_sheets",
            StatEvent::GoalsConceded => "goals_conceded",
            StatEvent::Saves => "saves",
            StatEvent::PenaltySaved => "penalties_saved",
            StatEvent::PenaltyMissed => "penalties_missed",
            StatEvent::YellowCard => "yellow_cards",
            StatEvent::RedCard => "red_cards",
            StatEvent::OwnGoal => "own_goals",
            StatEvent::DefensiveContribution => "defensive_contribution",
            StatEvent::Bonus => "bonus",
        }
    }

    /// The count this event reads from a stat record.
    pub fn count_in(&self, position: Position, record: &PlayerStatRecord) -> u32 {
        match self {
            StatEvent::Minutes => record.minutes,
            StatEvent::GoalScored => record.goals_scored,
            StatEvent::Assist => record.assists,
            StatEvent::CleanSheet => record.clean_sheets,
            StatEvent::GoalsConceded => record.goals_conceded,
            StatEvent::Saves => record.saves,
            StatEvent::PenaltySaved => record.penalties_saved,
            StatEvent::PenaltyMissed => record.penalties_missed,
            StatEvent::YellowCard => record.yellow_cards,
            StatEvent::RedCard => record.red_cards,
            StatEvent::OwnGoal => record.own_goals,
            StatEvent::DefensiveContribution => defensive_actions(position, record),
            StatEvent::Bonus => record.bonus,
        }
    }
}

impl fmt::Display for StatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StatEvent {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        StatEvent::ALL
            .into_iter()
            .find(|event| event.name() == s)
            .ok_or(())
    }
}

/// Defensive actions counted towards the contribution award for a position.
pub fn defensive_actions(position: Position, record: &PlayerStatRecord) -> u32 {
    match position {
        Position::Goalkeeper => 0,
        Position::Defender => record.cbit(),
        Position::Midfielder | Position::Forward => record.cbirt(),
    }
}

/// Immutable, shareable handle on a season's weights.
#[derive(Debug, Clone)]
pub struct ScoringRules {
    weights: Arc<ScoringWeights>,
}

impl ScoringRules {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights: Arc::new(weights),
        }
    }

    pub fn for_season(season: Season) -> Result<Self> {
        Ok(Self::new(ScoringWeights::builtin(season)?))
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn bps_weights(&self) -> &BpsWeights {
        &self.weights.bps
    }

    pub fn season(&self) -> Season {
        self.weights.season
    }

    /// Points a position earns for `count` occurrences of `event`.
    ///
    /// Components may be negative; flooring happens on the player total.
    pub fn points_for(&self, position: Position, event: StatEvent, count: u32) -> i32 {
        let w = &*self.weights;
        match event {
            StatEvent::Minutes => {
                if count == 0 {
                    0
                } else if count >= w.appearance.long_appearance_minutes {
                    w.appearance.played + w.appearance.long_appearance
                } else {
                    w.appearance.played
                }
            }
            StatEvent::GoalScored => scaled(w.goal_scored.get(position), count),
            StatEvent::Assist => scaled(w.assist, count),
            StatEvent::CleanSheet => scaled(w.clean_sheet.get(position), count),
            StatEvent::GoalsConceded => {
                per_block(w.goals_conceded.get(position), count, w.goals_conceded_per)
            }
            StatEvent::Saves => match position {
                Position::Goalkeeper => per_block(w.saves, count, w.saves_per),
                _ => 0,
            },
            StatEvent::PenaltySaved => match position {
                Position::Goalkeeper => scaled(w.penalty_saved, count),
                _ => 0,
            },
            StatEvent::PenaltyMissed => scaled(w.penalty_missed, count),
            StatEvent::YellowCard => scaled(w.yellow_card, count),
            StatEvent::RedCard => scaled(w.red_card, count),
            StatEvent::OwnGoal => scaled(w.own_goal, count),
            StatEvent::DefensiveContribution => {
                let Some(dc) = w.defensive_contribution else {
                    return 0;
                };
                let threshold = match position {
                    Position::Goalkeeper => return 0,
                    Position::Defender => dc.defender_threshold,
                    Position::Midfielder | Position::Forward => dc.outfield_threshold,
                };
                if count >= threshold {
                    dc.points
                } else {
                    0
                }
            }
            StatEvent::Bonus => scaled(1, count),
        }
    }

    /// String-keyed variant of [`points_for`](Self::points_for). Unknown event
    /// names score 0.
    pub fn points_for_name(&self, position: Position, event: &str, count: u32) -> i32 {
        match event.parse::<StatEvent>() {
            Ok(event) => self.points_for(position, event, count),
            Err(()) => {
                debug!(event, "unknown scoring event, contributes 0");
                0
            }
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::new(ScoringWeights::season_2025_26())
    }
}

/// `points * count`, saturating at the `i32` bounds.
fn scaled(points: i32, count: u32) -> i32 {
    let product = i64::from(points) * i64::from(count);
    i32::try_from(product).unwrap_or(if product < 0 { i32::MIN } else { i32::MAX })
}

/// `points` for every whole block of `per` units (floor division).
fn per_block(points: i32, count: u32, per: u32) -> i32 {
    if per == 0 {
        return 0;
    }
    scaled(points, count / per)
}
