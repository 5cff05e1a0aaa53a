//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use types::{FixtureId, Gameweek, Season, SquadId};

use crate::engine::squad::SelectionPolicy;

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-scoring",
    about = "Fantasy Premier League scoring and bonus points engine",
    version
)]
pub struct FplScoring {
    /// SQLite database path (or set `FPL_SCORING_DB`).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Season whose scoring rules apply (e.g. 2025/26).
    #[clap(long, short, global = true, default_value_t = Season::default())]
    pub season: Season,

    /// Scoring rules JSON file, used instead of the season's table.
    #[clap(long, global = true)]
    pub rules: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load fixtures, player stats and squads from a JSON document.
    Load {
        /// File with `players`, `fixtures`, `stats` and `squads` arrays.
        #[clap(long, short)]
        file: PathBuf,
    },

    /// Compute bonus and points for finished fixtures and store them.
    Process {
        #[clap(subcommand)]
        cmd: ProcessCmd,
    },

    /// Total a squad's points for a gameweek.
    ///
    /// Fixtures in the gameweek must have been processed first.
    SquadPoints {
        #[clap(long)]
        squad: SquadId,

        #[clap(long, short)]
        gameweek: Gameweek,

        /// How the starting XI is picked from players who played.
        #[clap(long, value_enum, default_value_t = SelectionPolicy::default())]
        policy: SelectionPolicy,

        /// Count bench points at full value.
        #[clap(long)]
        bench_boost: bool,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the scoring rules in effect.
    Rules {
        /// Output the full table as JSON.
        #[clap(long)]
        json: bool,

        /// Write the table to the per-season config file for editing.
        #[clap(long)]
        save: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProcessCmd {
    /// Process a single finished fixture.
    Fixture {
        #[clap(long)]
        id: FixtureId,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Process every finished fixture in a gameweek.
    Gameweek {
        #[clap(long, short)]
        gameweek: Gameweek,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}
