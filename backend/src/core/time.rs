//! Generation clock for the simulation
//!
//! The automaton advances in discrete generations. This module counts them
//! and answers "is a snapshot due" questions for drivers that export every
//! k-th generation.

use serde::{Deserialize, Serialize};

/// Counts completed generation advances
///
/// # Example
/// ```
/// use life_simulator_core_rs::GenerationClock;
///
/// let mut clock = GenerationClock::new();
/// assert_eq!(clock.current(), 0);
///
/// clock.advance();
/// assert_eq!(clock.current(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationClock {
    /// Completed advances since construction
    generation: usize,
}

impl GenerationClock {
    /// Create a clock at generation 0
    pub fn new() -> Self {
        Self { generation: 0 }
    }

    /// Create a clock resumed at `generation`
    pub fn resumed_at(generation: usize) -> Self {
        Self { generation }
    }

    /// Advance by one generation
    pub fn advance(&mut self) {
        self.generation += 1;
    }

    /// Number of completed advances
    pub fn current(&self) -> usize {
        self.generation
    }

    /// Check whether the current generation falls on an export interval
    ///
    /// Generation 0 is always due. An interval of 0 means "never after the
    /// initial generation".
    ///
    /// # Example
    /// ```
    /// use life_simulator_core_rs::GenerationClock;
    ///
    /// let mut clock = GenerationClock::new();
    /// assert!(clock.is_due(5));
    /// clock.advance();
    /// assert!(!clock.is_due(5));
    /// ```
    pub fn is_due(&self, every: usize) -> bool {
        if self.generation == 0 {
            return true;
        }
        every != 0 && self.generation % every == 0
    }
}
