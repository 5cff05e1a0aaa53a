//! Scoring engine: rules tables, per-player points, BPS and bonus, squad
//! aggregation and fixture/gameweek processing.
//!
//! Everything except [`processor::MatchProcessor`] is pure computation over
//! stat records.

pub mod bonus;
pub mod bps;
pub mod points;
pub mod processor;
pub mod rules;
pub mod squad;

pub use bonus::{calculate_bonus, BonusAward, BonusTable, BONUS_TIERS};
pub use bps::compute_bps;
pub use points::{points_breakdown, total_points, PointsBreakdown};
pub use processor::{score_fixture, MatchProcessor};
pub use rules::{ScoringRules, ScoringWeights, StatEvent};
pub use squad::{
    aggregate_squad, select_starting_xi, AggregationOptions, GameweekPerformance, SelectionPolicy,
};
