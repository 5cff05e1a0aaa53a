//! Command implementations for the FPL scoring CLI

pub mod common;
pub mod load;
pub mod process;
pub mod rules;
pub mod squad_points;
