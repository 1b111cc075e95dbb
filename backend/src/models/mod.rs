//! Domain models for the life simulator

pub mod cell;
pub mod grid;
pub mod history;

// Re-exports
pub use cell::Cell;
pub use grid::{Grid, Neighborhood};
pub use history::PopulationHistory;
