//! Paths and ruleset resolution.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::cli::types::Season;
use crate::engine::rules::{ScoringRules, ScoringWeights};
use crate::error::Result;

#[cfg(test)]
mod tests;

/// Environment variable consulted for the database path when `--db` is absent.
pub const DB_PATH_ENV_VAR: &str = "FPL_SCORING_DB";

const APP_DIR: &str = "fpl-scoring";

/// Where a run's scoring rules came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    File(PathBuf),
    Builtin(Season),
}

impl std::fmt::Display for RulesSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesSource::File(path) => write!(f, "{}", path.display()),
            RulesSource::Builtin(season) => write!(f, "built-in {}", season),
        }
    }
}

fn app_dir(base: Option<PathBuf>, hidden: &str) -> PathBuf {
    let base = base.unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(hidden);
        home
    });
    base.join(APP_DIR)
}

/// Path: ~/.local/share/fpl-scoring/scoring.db (platform data dir)
pub fn default_database_path() -> PathBuf {
    app_dir(dirs::data_dir(), ".local/share").join("scoring.db")
}

/// `--db` if given, then `FPL_SCORING_DB`, then the platform data dir.
pub fn resolve_database_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| {
            std::env::var(DB_PATH_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_database_path)
}

/// Path: ~/.config/fpl-scoring/rules-{season-slug}.json
pub fn rules_path(season: Season) -> PathBuf {
    app_dir(dirs::config_dir(), ".config").join(format!("rules-{}.json", season.slug()))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Resolve the scoring rules for a run.
///
/// An explicit file must exist and parse. Otherwise a per-season file in the
/// config dir is used when present, and the built-in table when not. A
/// config-dir file that fails to parse is an error rather than a silent
/// fallback.
pub fn load_rules(season: Season, explicit: Option<&Path>) -> Result<(ScoringRules, RulesSource)> {
    if let Some(path) = explicit {
        let json = fs::read_to_string(path)?;
        let weights = ScoringWeights::from_json(&json)?;
        return Ok((checked(weights, season, path), RulesSource::File(path.to_path_buf())));
    }

    let path = rules_path(season);
    if let Some(json) = try_read_to_string(&path) {
        let weights = ScoringWeights::from_json(&json)?;
        return Ok((checked(weights, season, &path), RulesSource::File(path)));
    }

    debug!(season = %season, "using built-in scoring rules");
    Ok((ScoringRules::for_season(season)?, RulesSource::Builtin(season)))
}

/// Write a ruleset as pretty JSON so it can be edited and picked up by
/// [`load_rules`].
pub fn save_rules(path: &Path, rules: &ScoringRules) -> Result<()> {
    let json = serde_json::to_string_pretty(rules.weights())?;
    write_string(path, &json)?;
    Ok(())
}

fn checked(weights: ScoringWeights, season: Season, path: &Path) -> ScoringRules {
    if weights.season != season {
        warn!(
            path = %path.display(),
            requested = %season,
            file = %weights.season,
            "rules file is for a different season"
        );
    }
    ScoringRules::new(weights)
}
