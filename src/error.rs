//! Error types for the FPL scoring engine

use thiserror::Error;

use crate::cli::types::{FixtureId, Gameweek, PlayerId, SquadId};


pub type Result<T> = std::result::Result<T, ScoringError>;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("System time error: {0}")]
    SystemTime(#[from] std::time::SystemTimeError),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Fixture not found: {fixture_id}")]
    FixtureNotFound { fixture_id: FixtureId },

    #[error("Fixture {fixture_id} is not finished")]
    FixtureNotFinished { fixture_id: FixtureId },

    #[error("No stats available for fixture {fixture_id}")]
    NoStats { fixture_id: FixtureId },

    #[error("No finished fixtures in gameweek {gameweek}")]
    NoFixtures { gameweek: Gameweek },

    #[error("Invalid stat record for player {player_id}: {reason}")]
    InvalidStatRecord { player_id: PlayerId, reason: String },

    #[error("Invalid formation: {formation}")]
    InvalidFormation { formation: String },

    #[error("Invalid squad: {reason}")]
    InvalidSquad { reason: String },

    #[error("Squad not found: {squad_id}")]
    SquadNotFound { squad_id: SquadId },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("No scoring rules for season {season}")]
    UnknownSeason { season: String },
}

impl ScoringError {
    /// True for the errors that abort a single fixture because its inputs are
    /// not ready yet, as opposed to storage or data failures.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ScoringError::FixtureNotFinished { .. }
                | ScoringError::NoStats { .. }
                | ScoringError::NoFixtures { .. }
        )
    }
}
