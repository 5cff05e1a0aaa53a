//! Load command: ingest fixtures, stat records and squads from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    models::{Fixture, Player, PlayerStatRecord, Squad},
    storage::ScoringDatabase,
    Result,
};

/// Input document for `load`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct LoadDocument {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub stats: Vec<PlayerStatRecord>,
    #[serde(default)]
    pub squads: Vec<Squad>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub players: usize,
    pub fixtures: usize,
    pub stats: usize,
    pub squads: usize,
}

impl LoadDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject the whole document if any record or squad is malformed.
    pub fn validate(&self) -> Result<()> {
        for record in &self.stats {
            record.validate()?;
        }
        for squad in &self.squads {
            squad.validate()?;
        }
        Ok(())
    }
}

/// Validate then upsert everything in `doc`.
///
/// Fixtures are written before stats so every record's fixture exists.
/// Squad composition is checked once every member's position is known;
/// squads naming unknown players are stored with a warning.
pub fn load_document(db: &mut ScoringDatabase, doc: &LoadDocument) -> Result<LoadSummary> {
    doc.validate()?;

    for player in &doc.players {
        db.upsert_player(player)?;
    }
    for fixture in &doc.fixtures {
        db.upsert_fixture(fixture)?;
    }
    for record in &doc.stats {
        db.upsert_stat_record(record)?;
    }

    if !doc.squads.is_empty() {
        let positions = db.player_positions()?;
        for squad in &doc.squads {
            if squad.players.iter().all(|id| positions.contains_key(id)) {
                squad.validate_composition(|id| positions.get(&id).copied())?;
            } else {
                warn!(squad_id = %squad.squad_id, "squad has players with unknown positions");
            }
            db.save_squad(squad)?;
        }
    }

    let summary = LoadSummary {
        players: doc.players.len(),
        fixtures: doc.fixtures.len(),
        stats: doc.stats.len(),
        squads: doc.squads.len(),
    };
    info!(
        players = summary.players,
        fixtures = summary.fixtures,
        stats = summary.stats,
        squads = summary.squads,
        "document loaded"
    );
    Ok(summary)
}

/// Handle the load command
pub fn handle_load(db: &mut ScoringDatabase, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)?;
    let doc = LoadDocument::from_json(&json)?;
    let summary = load_document(db, &doc)?;

    println!(
        "✓ Loaded {} players, {} fixtures, {} stat records, {} squads",
        summary.players, summary.fixtures, summary.stats, summary.squads
    );
    Ok(())
}
