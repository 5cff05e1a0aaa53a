//! Time-related types for FPL seasons and gameweeks.

use crate::error::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Premier League season, identified by the year it starts in.
///
/// Displays in the usual `2025/26` form and parses `2025/26`, `2025-26`
/// or a bare `2025`.
///
/// # Examples
///
/// ```rust
/// use fpl_scoring::Season;
///
/// let season: Season = "2025-26".parse().unwrap();
/// assert_eq!(season.start_year(), 2025);
/// assert_eq!(season.to_string(), "2025/26");
/// assert_eq!(season.slug(), "2025-26");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Season(u16);

impl Season {
    pub fn new(start_year: u16) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> u16 {
        self.0
    }

    /// File-name friendly form, e.g. `2025-26`.
    pub fn slug(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl FromStr for Season {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScoringError::UnknownSeason {
            season: s.to_string(),
        };

        let trimmed = s.trim();
        let (start, end) = match trimmed.split_once(['/', '-']) {
            Some((start, end)) => (start, Some(end)),
            None => (trimmed, None),
        };

        let start_year: u16 = start.parse().map_err(|_| invalid())?;
        if start.len() != 4 {
            return Err(invalid());
        }

        if let Some(end) = end {
            let end_year: u16 = end.parse().map_err(|_| invalid())?;
            if end.len() != 2 || end_year != (start_year + 1) % 100 {
                return Err(invalid());
            }
        }

        Ok(Self(start_year))
    }
}

impl TryFrom<String> for Season {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Season> for String {
    fn from(season: Season) -> String {
        season.to_string()
    }
}

/// Type-safe wrapper for gameweek numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u16);

impl Gameweek {
    pub fn new(gameweek: u16) -> Self {
        Self(gameweek)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
