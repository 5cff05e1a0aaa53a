//! Raw per-player match statistics and fixtures, as supplied by ingestion.

use serde::{Deserialize, Serialize};

use crate::cli::types::{FixtureId, Gameweek, PlayerId, Position};
use crate::error::{Result, ScoringError};

/// Longest a player can be on the pitch in one match, extra time included.
pub const MAX_MINUTES: u32 = 120;

/// One player's observed performance in one fixture.
///
/// Every count defaults to 0 when absent from the input document, so the
/// scoring code can treat records as fully populated. Identity and position
/// are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatRecord {
    pub player_id: PlayerId,
    pub fixture_id: FixtureId,
    #[serde(default)]
    pub gameweek: Gameweek,
    pub position: Position,

    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    #[serde(default)]
    pub goals_conceded: u32,
    #[serde(default)]
    pub own_goals: u32,
    #[serde(default)]
    pub penalties_saved: u32,
    #[serde(default)]
    pub penalties_missed: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub saves: u32,

    /// Pre-assigned bonus, or the award written back after bonus calculation.
    #[serde(default)]
    pub bonus: u32,
    /// Raw BPS score, 0 until computed.
    #[serde(default)]
    pub bps: u32,

    // Defensive contribution inputs
    #[serde(default)]
    pub tackles: u32,
    #[serde(default)]
    pub interceptions: u32,
    #[serde(default)]
    pub clearances: u32,
    #[serde(default)]
    pub blocks: u32,
    #[serde(default)]
    pub recoveries: u32,

    // BPS-only inputs
    #[serde(default)]
    pub key_passes: u32,
    #[serde(default)]
    pub successful_dribbles: u32,
    #[serde(default)]
    pub penalties_won: u32,
    #[serde(default)]
    pub big_chances_created: u32,
    #[serde(default)]
    pub key_blocks: u32,
    #[serde(default)]
    pub errors_leading_to_goal: u32,
    #[serde(default)]
    pub errors_leading_to_attempt: u32,
    #[serde(default)]
    pub fouls: u32,
}

impl PlayerStatRecord {
    /// A record for a player who has not (yet) played: every count is zero.
    pub fn new(player_id: PlayerId, fixture_id: FixtureId, position: Position) -> Self {
        Self {
            player_id,
            fixture_id,
            gameweek: Gameweek::default(),
            position,
            minutes: 0,
            goals_scored: 0,
            assists: 0,
            clean_sheets: 0,
            goals_conceded: 0,
            own_goals: 0,
            penalties_saved: 0,
            penalties_missed: 0,
            yellow_cards: 0,
            red_cards: 0,
            saves: 0,
            bonus: 0,
            bps: 0,
            tackles: 0,
            interceptions: 0,
            clearances: 0,
            blocks: 0,
            recoveries: 0,
            key_passes: 0,
            successful_dribbles: 0,
            penalties_won: 0,
            big_chances_created: 0,
            key_blocks: 0,
            errors_leading_to_goal: 0,
            errors_leading_to_attempt: 0,
            fouls: 0,
        }
    }

    pub fn in_gameweek(mut self, gameweek: Gameweek) -> Self {
        self.gameweek = gameweek;
        self
    }

    pub fn played(&self) -> bool {
        self.minutes > 0
    }

    /// Clearances, blocks, interceptions and tackles (CBIT).
    pub fn cbit(&self) -> u32 {
        self.clearances
            .saturating_add(self.blocks)
            .saturating_add(self.interceptions)
            .saturating_add(self.tackles)
    }

    /// CBIT plus ball recoveries (CBIRT), the midfield/forward measure.
    pub fn cbirt(&self) -> u32 {
        self.cbit().saturating_add(self.recoveries)
    }

    /// Ingestion-time check. Counts are unsigned, so only the minutes bound
    /// needs enforcing here.
    pub fn validate(&self) -> Result<()> {
        if self.minutes > MAX_MINUTES {
            return Err(ScoringError::InvalidStatRecord {
                player_id: self.player_id,
                reason: format!("minutes {} exceeds {}", self.minutes, MAX_MINUTES),
            });
        }
        Ok(())
    }
}

/// Basic player information, used to resolve positions for squad checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub position: Position,
}

/// A scheduled match between two clubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub fixture_id: FixtureId,
    pub gameweek: Gameweek,
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_zero() {
        let record: PlayerStatRecord = serde_json::from_str(
            r#"{"player_id": 12, "fixture_id": 3, "gameweek": 1, "position": "DEF", "minutes": 90}"#,
        )
        .unwrap();

        assert_eq!(record.player_id, PlayerId::new(12));
        assert_eq!(record.position, Position::Defender);
        assert_eq!(record.minutes, 90);
        assert_eq!(record.goals_scored, 0);
        assert_eq!(record.bonus, 0);
        assert_eq!(record.recoveries, 0);
    }

    #[test]
    fn test_negative_counts_are_rejected_at_deserialization() {
        let result: std::result::Result<PlayerStatRecord, _> = serde_json::from_str(
            r#"{"player_id": 1, "fixture_id": 1, "position": "FWD", "goals_scored": -1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_position_is_rejected() {
        let result: std::result::Result<PlayerStatRecord, _> =
            serde_json::from_str(r#"{"player_id": 1, "fixture_id": 1, "minutes": 90}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_minutes_bound() {
        let mut record =
            PlayerStatRecord::new(PlayerId::new(1), FixtureId::new(1), Position::Forward);
        record.minutes = MAX_MINUTES;
        assert!(record.validate().is_ok());

        record.minutes = MAX_MINUTES + 1;
        match record.validate() {
            Err(ScoringError::InvalidStatRecord { player_id, .. }) => {
                assert_eq!(player_id, PlayerId::new(1))
            }
            other => panic!("Expected InvalidStatRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_defensive_sums() {
        let record = PlayerStatRecord {
            clearances: 4,
            blocks: 1,
            interceptions: 2,
            tackles: 3,
            recoveries: 5,
            ..PlayerStatRecord::new(PlayerId::new(4), FixtureId::new(1), Position::Defender)
        };
        assert_eq!(record.cbit(), 10);
        assert_eq!(record.cbirt(), 15);
    }

    #[test]
    fn test_defensive_sums_saturate() {
        let record = PlayerStatRecord {
            clearances: u32::MAX,
            tackles: 1,
            recoveries: 1,
            ..PlayerStatRecord::new(PlayerId::new(4), FixtureId::new(1), Position::Defender)
        };
        assert_eq!(record.cbit(), u32::MAX);
        assert_eq!(record.cbirt(), u32::MAX);
    }

    #[test]
    fn test_fixture_finished_defaults_false() {
        let fixture: Fixture = serde_json::from_str(r#"{"fixture_id": 9, "gameweek": 2}"#).unwrap();
        assert!(!fixture.finished);
        assert_eq!(fixture.home_team, None);
    }
}
