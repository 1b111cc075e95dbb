//! Engine - generation stepping and population bookkeeping
//!
//! See `simulation.rs` for the stepping loop, `config.rs` for how engines are
//! built, and `checkpoint.rs` for snapshots.

pub mod checkpoint;
pub mod config;
pub mod simulation;

pub use checkpoint::{compute_grid_hash, validate_snapshot, EngineSnapshot};
pub use config::{InitialCondition, NoiseConfig, SimulationConfig};
pub use simulation::{Engine, GenerationReport};
