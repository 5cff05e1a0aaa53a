//! Domain models shared by the scoring engine and the storage layer.

pub mod output;
pub mod squad;
pub mod stats;

pub use output::{
    FixtureOutcome, FixtureSummary, GameweekReport, PlayerContribution, PlayerScore, StartingXi,
    TeamPointsResult,
};
pub use squad::{required_in_squad, Formation, Squad, SQUAD_SIZE, STARTING_XI_SIZE};
pub use stats::{Fixture, Player, PlayerStatRecord, MAX_MINUTES};
