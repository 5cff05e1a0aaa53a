//! Database schema and connection management

use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// SQLite-backed store for fixtures, stat records and squads
pub struct ScoringDatabase {
    pub(crate) conn: Connection,
}

impl ScoringDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn new(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "opening scoring database");
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Fresh in-memory database, used by tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                position TEXT NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS fixtures (
                fixture_id INTEGER PRIMARY KEY,
                gameweek INTEGER NOT NULL,
                home_team TEXT,
                away_team TEXT,
                finished INTEGER NOT NULL DEFAULT 0
            )",
            [],
        )?;

        // One row per player per fixture; bonus/bps/total_points are
        // rewritten by fixture processing.
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS player_stats (
                player_id INTEGER NOT NULL,
                fixture_id INTEGER NOT NULL,
                gameweek INTEGER NOT NULL,
                position TEXT NOT NULL,
                minutes INTEGER NOT NULL DEFAULT 0,
                goals_scored INTEGER NOT NULL DEFAULT 0,
                assists INTEGER NOT NULL DEFAULT 0,
                clean_sheets INTEGER NOT NULL DEFAULT 0,
                goals_conceded INTEGER NOT NULL DEFAULT 0,
                own_goals INTEGER NOT NULL DEFAULT 0,
                penalties_saved INTEGER NOT NULL DEFAULT 0,
                penalties_missed INTEGER NOT NULL DEFAULT 0,
                yellow_cards INTEGER NOT NULL DEFAULT 0,
                red_cards INTEGER NOT NULL DEFAULT 0,
                saves INTEGER NOT NULL DEFAULT 0,
                bonus INTEGER NOT NULL DEFAULT 0,
                bps INTEGER NOT NULL DEFAULT 0,
                tackles INTEGER NOT NULL DEFAULT 0,
                interceptions INTEGER NOT NULL DEFAULT 0,
                clearances INTEGER NOT NULL DEFAULT 0,
                blocks INTEGER NOT NULL DEFAULT 0,
                recoveries INTEGER NOT NULL DEFAULT 0,
                key_passes INTEGER NOT NULL DEFAULT 0,
                successful_dribbles INTEGER NOT NULL DEFAULT 0,
                penalties_won INTEGER NOT NULL DEFAULT 0,
                big_chances_created INTEGER NOT NULL DEFAULT 0,
                key_blocks INTEGER NOT NULL DEFAULT 0,
                errors_leading_to_goal INTEGER NOT NULL DEFAULT 0,
                errors_leading_to_attempt INTEGER NOT NULL DEFAULT 0,
                fouls INTEGER NOT NULL DEFAULT 0,
                total_points INTEGER,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (player_id, fixture_id),
                FOREIGN KEY (fixture_id) REFERENCES fixtures(fixture_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS squads (
                squad_id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                formation TEXT NOT NULL,
                captain INTEGER NOT NULL,
                vice_captain INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS squad_players (
                squad_id INTEGER NOT NULL,
                slot INTEGER NOT NULL,
                player_id INTEGER NOT NULL,
                PRIMARY KEY (squad_id, slot),
                FOREIGN KEY (squad_id) REFERENCES squads(squad_id) ON DELETE CASCADE
            )",
            [],
        )?;

        // Create indexes for performance
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_stats_gameweek
             ON player_stats(gameweek, player_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_player_stats_fixture
             ON player_stats(fixture_id)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_fixtures_gameweek
             ON fixtures(gameweek)",
            [],
        )?;

        Ok(())
    }
}
