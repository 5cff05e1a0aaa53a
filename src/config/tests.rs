//! Unit tests for path and ruleset resolution

use super::*;
use crate::error::ScoringError;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_rules_path() {
    let path = rules_path(Season::new(2025));

    assert!(path
        .to_string_lossy()
        .ends_with("fpl-scoring/rules-2025-26.json"));
    assert_ne!(path, rules_path(Season::new(2024)));
}

#[test]
fn test_default_database_path() {
    let path = default_database_path();
    assert!(path.to_string_lossy().ends_with("fpl-scoring/scoring.db"));
}

#[test]
fn test_resolve_database_path() {
    let explicit = PathBuf::from("/tmp/explicit.db");

    std::env::set_var(DB_PATH_ENV_VAR, "/tmp/from-env.db");
    assert_eq!(resolve_database_path(Some(explicit.clone())), explicit);
    assert_eq!(
        resolve_database_path(None),
        PathBuf::from("/tmp/from-env.db")
    );

    // Blank values are ignored
    std::env::set_var(DB_PATH_ENV_VAR, "  ");
    assert_eq!(resolve_database_path(None), default_database_path());

    std::env::remove_var(DB_PATH_ENV_VAR);
    assert_eq!(resolve_database_path(None), default_database_path());
}

#[test]
fn test_try_read_to_string() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("rules.json");

    assert!(try_read_to_string(&file_path).is_none());

    fs::write(&file_path, "{}").unwrap();
    assert_eq!(try_read_to_string(&file_path).unwrap(), "{}");
}

#[test]
fn test_write_string_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("a").join("b").join("out.json");

    write_string(&file_path, "content").unwrap();
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "content");
}

#[test]
fn test_load_rules_from_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("custom.json");

    let mut weights = ScoringWeights::season_2024_25();
    weights.assist = 4;
    save_rules(&file_path, &ScoringRules::new(weights)).unwrap();

    let (rules, source) = load_rules(Season::new(2024), Some(&file_path)).unwrap();
    assert_eq!(rules.weights().assist, 4);
    assert_eq!(rules.season(), Season::new(2024));
    assert_eq!(source, RulesSource::File(file_path));
}

#[test]
fn test_explicit_file_for_other_season_still_used() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("old.json");
    save_rules(&file_path, &ScoringRules::for_season(Season::new(2024)).unwrap()).unwrap();

    let (rules, _) = load_rules(Season::new(2025), Some(&file_path)).unwrap();
    assert_eq!(rules.season(), Season::new(2024));
    assert!(rules.weights().defensive_contribution.is_none());
}

#[test]
fn test_load_rules_missing_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_rules(
        Season::default(),
        Some(&temp_dir.path().join("missing.json")),
    );
    assert!(matches!(result, Err(ScoringError::Io(_))));
}

#[test]
fn test_load_rules_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("bad.json");
    fs::write(&file_path, "{ not json").unwrap();

    let result = load_rules(Season::default(), Some(&file_path));
    assert!(matches!(result, Err(ScoringError::Json(_))));
}

#[test]
fn test_load_rules_builtin_fallback() {
    let season = Season::new(2024);
    // A user-level override would take precedence; nothing to assert then
    if rules_path(season).exists() {
        return;
    }

    let (rules, source) = load_rules(season, None).unwrap();
    assert_eq!(rules.weights(), &ScoringWeights::season_2024_25());
    assert_eq!(source, RulesSource::Builtin(season));
    assert_eq!(source.to_string(), "built-in 2024/25");
}

#[test]
fn test_load_rules_unknown_season() {
    let season = Season::new(1999);
    if rules_path(season).exists() {
        return;
    }

    assert!(matches!(
        load_rules(season, None),
        Err(ScoringError::UnknownSeason { .. })
    ));
}
