//! Core building blocks shared by every other module
//!
//! - **error**: the single error type of the simulator
//! - **time**: generation clock

pub mod error;
pub mod time;

pub use error::{SimulationError, SimulationResult};
pub use time::GenerationClock;
