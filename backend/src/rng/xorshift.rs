//! xorshift64* random number generator
//!
//! This is a fast, high-quality PRNG that is deterministic and suitable
//! for simulation purposes.
//!
//! # Algorithm
//!
//! xorshift64* is a variant of xorshift that passes TestU01's BigCrush
//! statistical tests. It uses 64-bit state and produces 64-bit output.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce an exact run)
//! - Testing (golden grids pinned to a seed)
//! - Research (compare rulesets from identical initial conditions)
//!
//! # Seed range
//!
//! [`RandomSource::set_seed`] accepts `0..=i64::MAX`. Negative seeds are a
//! configuration error. Seed 0 maps to state 1, so seeds 0 and 1 produce
//! the same stream.

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use super::RandomSource;
use crate::core::{SimulationError, SimulationResult};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use life_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let range_value = rng.range(0, 100); // [0, 100)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// # Example
    /// ```
    /// use life_simulator_core_rs::RngManager;
    ///
    /// let rng = RngManager::new(12345);
    /// assert_eq!(rng.get_state(), 12345);
    /// ```
    pub fn new(seed: u64) -> Self {
        // Ensure seed is never zero (xorshift requirement)
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG seeded from OS entropy
    ///
    /// Used when no seed is configured. The resulting stream is not
    /// reproducible.
    pub fn from_entropy() -> Self {
        let bits = Uuid::new_v4().as_u128();
        let seed = (bits >> 64) as u64 ^ bits as u64;
        debug!(state = seed, "rng seeded from entropy");
        Self::new(seed)
    }

    /// Generate next random u64 value
    ///
    /// This advances the internal state and returns a random value.
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random value in range [min, max)
    ///
    /// # Panics
    /// Panics if min >= max
    pub fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Get current RNG state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use life_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// rng.next();
    /// let state = rng.get_state();
    ///
    /// // Later, can recreate RNG from this state
    /// let mut resumed = RngManager::new(state);
    /// assert_eq!(rng.next(), resumed.next());
    /// ```
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    ///
    /// # Example
    /// ```
    /// use life_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(12345);
    /// let probability = rng.next_f64();
    /// assert!(probability >= 0.0 && probability < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Convert to [0.0, 1.0) by dividing by 2^53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }
}

impl RandomSource for RngManager {
    fn set_seed(&mut self, seed: i64) -> SimulationResult<()> {
        let seed = u64::try_from(seed).map_err(|_| {
            SimulationError::Configuration(format!(
                "seed must be within [0, {}], got {}",
                i64::MAX,
                seed
            ))
        })?;
        *self = RngManager::new(seed);
        Ok(())
    }

    fn next_uniform(&mut self) -> f64 {
        self.next_f64()
    }
}
