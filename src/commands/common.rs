//! Resources shared by the commands that touch the database.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    config::{load_rules, resolve_database_path, RulesSource},
    engine::rules::ScoringRules,
    storage::ScoringDatabase,
    Result, Season,
};

/// Context containing common resources needed by most commands
pub struct CommandContext {
    pub db: ScoringDatabase,
    pub rules: ScoringRules,
    pub rules_source: RulesSource,
}

impl CommandContext {
    /// Open the database and resolve the scoring rules for the run
    pub fn new(
        db_path: Option<PathBuf>,
        season: Season,
        rules_file: Option<&Path>,
    ) -> Result<Self> {
        let (rules, rules_source) = load_rules(season, rules_file)?;
        info!(season = %rules.season(), source = %rules_source, "scoring rules loaded");

        let path = resolve_database_path(db_path);
        debug!(path = %path.display(), "connecting to database");
        let db = ScoringDatabase::new(&path)?;

        Ok(Self {
            db,
            rules,
            rules_source,
        })
    }

    /// Context over an existing database, used by tests
    pub fn with_database(db: ScoringDatabase, rules: ScoringRules) -> Self {
        let rules_source = RulesSource::Builtin(rules.season());
        Self {
            db,
            rules,
            rules_source,
        }
    }
}
