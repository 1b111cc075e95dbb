//! Life Simulator Core - Rust Engine
//!
//! Two-dimensional cellular automaton (Conway's Game of Life and an
//! experimental variant) with deterministic, seeded execution and population
//! tracking.
//!
//! # Architecture
//!
//! - **core**: Errors and the generation clock
//! - **rng**: Deterministic random number generation
//! - **models**: Domain types (Cell, Grid, PopulationHistory)
//! - **rules**: Basic and Experimental transition rules
//! - **engine**: Generation stepping, configuration, snapshots
//! - **io**: Image sources, PNG/chart exporters, console and progress output
//!
//! # Critical Invariants
//!
//! 1. Grid dimensions never change during an advance
//! 2. All randomness is deterministic (seeded RNG, row-major draw order)
//! 3. A generation advance is atomic (double-buffered)
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod core;
pub mod engine;
pub mod io;
pub mod models;
pub mod rng;
pub mod rules;

// Re-exports for convenience
pub use crate::core::{GenerationClock, SimulationError, SimulationResult};
pub use engine::{
    Engine, EngineSnapshot, GenerationReport, InitialCondition, NoiseConfig, SimulationConfig,
};
pub use models::{Cell, Grid, Neighborhood, PopulationHistory};
pub use rng::{RandomSource, RngManager};
pub use rules::{next_state, Ruleset, OVERPOPULATION_DEATH_PROBABILITY};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn life_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::game::PyGame>()?;
    Ok(())
}
