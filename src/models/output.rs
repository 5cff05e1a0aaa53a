//! Output models used for printing and JSON serialization.

use serde::Serialize;

use crate::cli::types::{FixtureId, Gameweek, PlayerId, Position, SquadId};

/// Final scoring for one player in one fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub position: Position,
    pub minutes: u32,
    /// BPS computed for this fixture (0 for players who did not play).
    pub bps: u32,
    /// Bonus awarded from BPS (0-3).
    pub bonus: u32,
    /// Fantasy points including bonus, floored at 0.
    pub total_points: i32,
}

/// Result of processing one finished fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureSummary {
    pub fixture_id: FixtureId,
    pub gameweek: Gameweek,
    pub players_processed: usize,
    pub total_bonus_awarded: u32,
    pub scores: Vec<PlayerScore>,
}

impl FixtureSummary {
    pub fn score_for(&self, player_id: PlayerId) -> Option<&PlayerScore> {
        self.scores.iter().find(|s| s.player_id == player_id)
    }
}

/// Per-fixture outcome inside a gameweek batch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FixtureOutcome {
    Processed(FixtureSummary),
    Failed { fixture_id: FixtureId, error: String },
}

impl FixtureOutcome {
    pub fn fixture_id(&self) -> FixtureId {
        match self {
            FixtureOutcome::Processed(summary) => summary.fixture_id,
            FixtureOutcome::Failed { fixture_id, .. } => *fixture_id,
        }
    }
}

/// Result of a gameweek batch. One bad fixture never hides the others.
#[derive(Debug, Clone, Serialize)]
pub struct GameweekReport {
    pub gameweek: Gameweek,
    pub outcomes: Vec<FixtureOutcome>,
}

impl GameweekReport {
    pub fn processed(&self) -> impl Iterator<Item = &FixtureSummary> {
        self.outcomes.iter().filter_map(|o| match o {
            FixtureOutcome::Processed(summary) => Some(summary),
            FixtureOutcome::Failed { .. } => None,
        })
    }

    pub fn failed(&self) -> impl Iterator<Item = (FixtureId, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            FixtureOutcome::Failed { fixture_id, error } => Some((*fixture_id, error.as_str())),
            FixtureOutcome::Processed(_) => None,
        })
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed().next().is_none()
    }

    pub fn players_processed(&self) -> usize {
        self.processed().map(|s| s.players_processed).sum()
    }

    pub fn total_bonus_awarded(&self) -> u32 {
        self.processed().map(|s| s.total_bonus_awarded).sum()
    }
}

/// Starting players grouped by position, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StartingXi {
    pub goalkeepers: Vec<PlayerId>,
    pub defenders: Vec<PlayerId>,
    pub midfielders: Vec<PlayerId>,
    pub forwards: Vec<PlayerId>,
}

impl StartingXi {
    pub fn position(&self, position: Position) -> &[PlayerId] {
        match position {
            Position::Goalkeeper => &self.goalkeepers,
            Position::Defender => &self.defenders,
            Position::Midfielder => &self.midfielders,
            Position::Forward => &self.forwards,
        }
    }

    pub(crate) fn position_mut(&mut self, position: Position) -> &mut Vec<PlayerId> {
        match position {
            Position::Goalkeeper => &mut self.goalkeepers,
            Position::Defender => &mut self.defenders,
            Position::Midfielder => &mut self.midfielders,
            Position::Forward => &mut self.forwards,
        }
    }

    pub fn len(&self) -> usize {
        self.goalkeepers.len() + self.defenders.len() + self.midfielders.len() + self.forwards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.iter().any(|id| id == player_id)
    }

    /// GK, DEF, MID, FWD order.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.goalkeepers
            .iter()
            .chain(&self.defenders)
            .chain(&self.midfielders)
            .chain(&self.forwards)
            .copied()
    }
}

/// How one squad member contributed to the team score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerContribution {
    pub player_id: PlayerId,
    /// None when no gameweek data exists for the player.
    pub position: Option<Position>,
    pub minutes: u32,
    pub base_points: i32,
    pub multiplier: u8,
    pub final_points: i32,
    pub starting: bool,
}

/// A squad's score for one gameweek.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPointsResult {
    pub squad_id: SquadId,
    pub total_points: i32,
    /// Bench points, counted in `total_points` only under bench boost.
    pub bench_points: i32,
    pub starting_xi: StartingXi,
    pub bench: Vec<PlayerId>,
    /// Player whose points were doubled, if any.
    pub armband: Option<PlayerId>,
    pub breakdown: Vec<PlayerContribution>,
}

impl TeamPointsResult {
    /// True when every one of the 11 starting slots was filled.
    pub fn is_full_xi(&self) -> bool {
        self.starting_xi.len() == crate::models::STARTING_XI_SIZE
    }

    pub fn contribution(&self, player_id: PlayerId) -> Option<&PlayerContribution> {
        self.breakdown.iter().find(|c| c.player_id == player_id)
    }
}
