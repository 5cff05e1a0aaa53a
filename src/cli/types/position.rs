//! FPL player positions.

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// The four FPL playing positions.
///
/// Scoring tables are keyed by position: goals are worth more to a defender
/// than to a forward, and only goalkeepers score for saves.
///
/// # Examples
///
/// ```rust
/// use fpl_scoring::Position;
///
/// let gk: Position = "GKP".parse().unwrap();
/// assert_eq!(gk, Position::Goalkeeper);
/// assert_eq!(gk.to_string(), "GK");
/// assert_eq!(Position::try_from(4u8).unwrap(), Position::Forward);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK", alias = "GKP")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// FPL `element_type` id for this position.
    pub fn to_u8(&self) -> u8 {
        match self {
            Position::Goalkeeper => 1,
            Position::Defender => 2,
            Position::Midfielder => 3,
            Position::Forward => 4,
        }
    }
}

impl TryFrom<u8> for Position {
    type Error = ScoringError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Position::Goalkeeper),
            2 => Ok(Position::Defender),
            3 => Ok(Position::Midfielder),
            4 => Ok(Position::Forward),
            _ => Err(ScoringError::InvalidPosition {
                position: format!("Unknown element type: {}", value),
            }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Goalkeeper => write!(f, "GK"),
            Position::Defender => write!(f, "DEF"),
            Position::Midfielder => write!(f, "MID"),
            Position::Forward => write!(f, "FWD"),
        }
    }
}

impl FromStr for Position {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "GK" | "GKP" | "GOALKEEPER" => Ok(Position::Goalkeeper),
            "DEF" | "DEFENDER" => Ok(Position::Defender),
            "MID" | "MIDFIELDER" => Ok(Position::Midfielder),
            "FWD" | "FORWARD" => Ok(Position::Forward),
            _ => Err(ScoringError::InvalidPosition {
                position: format!("Unknown position: {}", s),
            }),
        }
    }
}
