//! Storage layer for fixtures, stat records and squads
//!
//! The engine only sees the [`StatStore`] trait. [`ScoringDatabase`] is the
//! SQLite implementation, organized as:
//! - `schema`: Database connection and schema management
//! - `queries`: Stat record, fixture and squad operations

pub mod queries;
pub mod schema;


use crate::cli::types::{FixtureId, Gameweek};
use crate::error::Result;
use crate::models::{Fixture, FixtureSummary, PlayerStatRecord};

pub use schema::ScoringDatabase;

/// Where the match processor reads stat records from and writes results to.
pub trait StatStore {
    fn fixture(&self, fixture_id: FixtureId) -> Result<Option<Fixture>>;

    /// All fixtures in a gameweek, finished or not, ordered by id.
    fn fixtures_for_gameweek(&self, gameweek: Gameweek) -> Result<Vec<Fixture>>;

    /// Every player's stat record for a fixture, ordered by player id.
    fn fixture_stats(&self, fixture_id: FixtureId) -> Result<Vec<PlayerStatRecord>>;

    /// Upsert bonus, BPS and total points keyed by (player, fixture).
    /// Writing the same summary twice leaves the store unchanged.
    fn write_fixture_scores(&mut self, summary: &FixtureSummary) -> Result<()>;
}
