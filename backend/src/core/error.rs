//! Simulation error types
//!
//! Every fallible operation of the simulator returns [`SimulationError`].
//!
//! # Critical Invariants
//!
//! - Errors are raised BEFORE any state is mutated: a failing operation
//!   leaves grid, population history and RNG exactly as they were.
//! - No variant is retried internally. Callers decide whether to abort
//!   or substitute defaults.

use thiserror::Error;

/// Errors that can occur anywhere in the simulator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid grid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Cell ({row}, {col}) out of range for {height}x{width} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("Unknown ruleset: {0}")]
    UnknownRuleset(String),

    #[error("Unreadable source: {0}")]
    UnreadableSource(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("State validation failed: {0}")]
    StateValidation(String),
}

/// Convenience alias used throughout the crate
pub type SimulationResult<T> = Result<T, SimulationError>;

impl SimulationError {
    /// Build an `InvalidParameter` for a probability outside [0, 1]
    pub(crate) fn probability(name: &str, value: f64) -> Self {
        SimulationError::InvalidParameter {
            name: name.to_string(),
            reason: format!("probability must be within [0, 1], got {}", value),
        }
    }
}

/// Validate that `value` is a probability in [0, 1]
///
/// NaN is rejected as well.
pub(crate) fn check_probability(name: &str, value: f64) -> SimulationResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimulationError::probability(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_probability_bounds_inclusive() {
        assert!(check_probability("p", 0.0).is_ok());
        assert!(check_probability("p", 1.0).is_ok());
        assert!(check_probability("p", -0.01).is_err());
        assert!(check_probability("p", 1.01).is_err());
        assert!(check_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn test_display_index_out_of_range() {
        let err = SimulationError::IndexOutOfRange {
            row: 7,
            col: 2,
            height: 5,
            width: 10,
        };
        assert_eq!(err.to_string(), "Cell (7, 2) out of range for 5x10 grid");
    }
}
