//! Random source interface
//!
//! # Draw-order contract
//!
//! Reproducibility depends on the ORDER in which draws are consumed:
//! - `randomize` takes exactly one draw per cell, rows outer, columns inner
//! - `add_noise` takes one or two draws per cell in the same order
//! - the experimental rule takes one draw per alive overpopulated cell,
//!   in the order cells are evaluated (row-major)
//!
//! Any implementation that is deterministic given its seed keeps these
//! sequences reproducible.

use crate::core::SimulationResult;

/// Source of uniform draws in [0, 1)
///
/// # Example
/// ```
/// use life_simulator_core_rs::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(1);
/// rng.set_seed(12345).unwrap();
/// let r = rng.next_uniform();
/// assert!((0.0..1.0).contains(&r));
/// ```
pub trait RandomSource {
    /// Reinitialize so the following draws are fully determined by `seed`
    ///
    /// Implementations reject seeds they cannot represent with
    /// `SimulationError::Configuration` and leave their state untouched.
    fn set_seed(&mut self, seed: i64) -> SimulationResult<()>;

    /// Next uniform draw in [0, 1), advancing the internal state by one step
    fn next_uniform(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn set_seed(&mut self, seed: i64) -> SimulationResult<()> {
        (**self).set_seed(seed)
    }

    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn set_seed(&mut self, seed: i64) -> SimulationResult<()> {
        (**self).set_seed(seed)
    }

    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
