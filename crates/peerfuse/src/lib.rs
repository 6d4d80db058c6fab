//! Study-partner compatibility scoring and the simulation harness used to tune its weights.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
