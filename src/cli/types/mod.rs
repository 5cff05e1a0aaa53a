//! Type-safe wrappers and enums for FPL scoring data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{FixtureId, PlayerId, SquadId};
pub use position::Position;
pub use time::{Gameweek, Season};
