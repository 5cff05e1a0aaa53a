//! User squads and formations.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::cli::types::{PlayerId, Position, SquadId};
use crate::error::{Result, ScoringError};

pub const SQUAD_SIZE: usize = 15;
pub const STARTING_XI_SIZE: usize = 11;

/// Outfield line-up, e.g. `4-4-2`. The goalkeeper is implicit.
///
/// # Examples
///
/// ```rust
/// use fpl_scoring::models::Formation;
///
/// let formation: Formation = "3-5-2".parse().unwrap();
/// assert_eq!(formation.defenders, 3);
/// assert!(formation.is_legal());
/// assert!("4-4-3".parse::<Formation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Formation {
    pub defenders: u8,
    pub midfielders: u8,
    pub forwards: u8,
}

impl Formation {
    pub fn new(defenders: u8, midfielders: u8, forwards: u8) -> Result<Self> {
        if defenders as usize + midfielders as usize + forwards as usize != STARTING_XI_SIZE - 1 {
            return Err(ScoringError::InvalidFormation {
                formation: format!("{}-{}-{}", defenders, midfielders, forwards),
            });
        }
        Ok(Self {
            defenders,
            midfielders,
            forwards,
        })
    }

    /// Starting slots this formation gives a position.
    pub fn slots(&self, position: Position) -> usize {
        match position {
            Position::Goalkeeper => 1,
            Position::Defender => self.defenders as usize,
            Position::Midfielder => self.midfielders as usize,
            Position::Forward => self.forwards as usize,
        }
    }

    /// Whether the formation is one FPL allows (DEF 3-5, MID 2-5, FWD 1-3).
    /// The aggregator does not enforce this; callers decide.
    pub fn is_legal(&self) -> bool {
        (3..=5).contains(&self.defenders)
            && (2..=5).contains(&self.midfielders)
            && (1..=3).contains(&self.forwards)
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self {
            defenders: 4,
            midfielders: 4,
            forwards: 2,
        }
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.forwards)
    }
}

impl FromStr for Formation {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ScoringError::InvalidFormation {
            formation: s.to_string(),
        };

        let parts = s
            .trim()
            .split('-')
            .map(|p| p.trim().parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<u8>>>()?;

        match parts.as_slice() {
            [d, m, f] => Formation::new(*d, *m, *f).map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Formation {
    type Error = ScoringError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Formation> for String {
    fn from(formation: Formation) -> String {
        formation.to_string()
    }
}

/// A user's 15-man squad with its chosen formation and armband holders.
///
/// Player order matters: it is the order the reference starting-XI policy
/// picks from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Squad {
    pub squad_id: SquadId,
    #[serde(default)]
    pub name: String,
    pub players: Vec<PlayerId>,
    #[serde(default)]
    pub formation: Formation,
    pub captain: PlayerId,
    pub vice_captain: PlayerId,
}

impl Squad {
    pub fn new(
        squad_id: SquadId,
        players: Vec<PlayerId>,
        formation: Formation,
        captain: PlayerId,
        vice_captain: PlayerId,
    ) -> Result<Self> {
        let squad = Self {
            squad_id,
            name: String::new(),
            players,
            formation,
            captain,
            vice_captain,
        };
        squad.validate()?;
        Ok(squad)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.contains(&player_id)
    }

    /// Structural checks that need no player data: 15 distinct players,
    /// distinct captain and vice-captain, both in the squad.
    pub fn validate(&self) -> Result<()> {
        if self.players.len() != SQUAD_SIZE {
            return Err(ScoringError::InvalidSquad {
                reason: format!(
                    "expected {} players, found {}",
                    SQUAD_SIZE,
                    self.players.len()
                ),
            });
        }

        let distinct: HashSet<PlayerId> = self.players.iter().copied().collect();
        if distinct.len() != self.players.len() {
            return Err(ScoringError::InvalidSquad {
                reason: "duplicate player in squad".to_string(),
            });
        }

        if self.captain == self.vice_captain {
            return Err(ScoringError::InvalidSquad {
                reason: "captain and vice-captain must differ".to_string(),
            });
        }

        for (role, id) in [("captain", self.captain), ("vice-captain", self.vice_captain)] {
            if !self.contains(id) {
                return Err(ScoringError::InvalidSquad {
                    reason: format!("{} {} is not in the squad", role, id),
                });
            }
        }

        Ok(())
    }

    /// Checks the standard 2 GK / 5 DEF / 5 MID / 3 FWD split, resolving
    /// positions through `position_of`.
    pub fn validate_composition<F>(&self, position_of: F) -> Result<()>
    where
        F: Fn(PlayerId) -> Option<Position>,
    {
        let mut counts = [0usize; 4];
        for &player_id in &self.players {
            let position = position_of(player_id).ok_or_else(|| ScoringError::InvalidSquad {
                reason: format!("no position known for player {}", player_id),
            })?;
            counts[position.to_u8() as usize - 1] += 1;
        }

        for position in Position::ALL {
            let expected = required_in_squad(position);
            let found = counts[position.to_u8() as usize - 1];
            if found != expected {
                return Err(ScoringError::InvalidSquad {
                    reason: format!("expected {} {} players, found {}", expected, position, found),
                });
            }
        }

        Ok(())
    }
}

/// Players of each position in a full FPL squad.
pub fn required_in_squad(position: Position) -> usize {
    match position {
        Position::Goalkeeper => 2,
        Position::Defender => 5,
        Position::Midfielder => 5,
        Position::Forward => 3,
    }
}
