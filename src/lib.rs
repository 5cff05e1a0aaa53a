//! Fantasy Premier League Scoring Library
//!
//! Turns per-match player statistics into FPL fantasy points: season
//! scoring rules, Bonus Points System (BPS) scores and the 3/2/1 bonus
//! award, per-player totals, and squad totals with the captain's armband.
//!
//! ## Features
//!
//! - **Versioned Rules**: Built-in 2024/25 and 2025/26 tables, or your own JSON
//! - **Bonus Points**: BPS from match stats, tie-aware 3/2/1 bonus award
//! - **Player Points**: Per-component breakdown, floored at zero
//! - **Squad Totals**: Starting XI from players who played, captain/vice-captain
//!   doubling, optional bench boost
//! - **Batch Processing**: Score a whole gameweek in parallel; a bad fixture
//!   never blocks the rest
//! - **Database Storage**: SQLite store for fixtures, stats and squads
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_scoring::{
//!     engine::{points::total_points, rules::ScoringRules},
//!     models::PlayerStatRecord,
//!     FixtureId, PlayerId, Position,
//! };
//!
//! let rules = ScoringRules::default();
//! let record = PlayerStatRecord {
//!     minutes: 90,
//!     clean_sheets: 1,
//!     ..PlayerStatRecord::new(PlayerId::new(7), FixtureId::new(1), Position::Defender)
//! };
//!
//! assert_eq!(total_points(&rules, Position::Defender, Some(&record)), 6);
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database without passing `--db` every time:
//! ```bash
//! export FPL_SCORING_DB=~/fpl/scoring.db
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{FixtureId, Gameweek, PlayerId, Position, Season, SquadId};
pub use error::{Result, ScoringError};
