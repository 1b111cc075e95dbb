//! Transition rules
//!
//! A ruleset decides the next state of one cell from its current state and
//! its neighbor count. Rulesets are NOT engine state: every advance names
//! the ruleset it uses, so consecutive generations may use different ones.
//!
//! # Rulesets
//!
//! 1. **Basic**: Conway's rules over the orthogonal neighborhood
//! 2. **Experimental**: Moore neighborhood, stochastic overpopulation and
//!    birth on 3 or 4 neighbors
//!
//! See `basic.rs` and `experimental.rs` for the exact tables.
//!
//! # Parsing
//!
//! Free-form text is accepted only at the boundary (`FromStr`, serde).
//! Anything other than `basic` / `experimental` is an `UnknownRuleset` error.

mod basic;
mod experimental;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{SimulationError, SimulationResult};
use crate::models::{Cell, Grid, Neighborhood};
use crate::rng::RandomSource;

pub use experimental::OVERPOPULATION_DEATH_PROBABILITY;

/// Transition-rule variant applied during one generation advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    #[default]
    Basic,
    Experimental,
}

impl Ruleset {
    pub const ALL: [Ruleset; 2] = [Ruleset::Basic, Ruleset::Experimental];

    /// Neighborhood this ruleset counts over
    pub fn neighborhood(self) -> Neighborhood {
        match self {
            Ruleset::Basic => Neighborhood::VonNeumann,
            Ruleset::Experimental => Neighborhood::Moore,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ruleset::Basic => "basic",
            Ruleset::Experimental => "experimental",
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Ruleset {
    type Err = SimulationError;

    fn from_str(s: &str) -> SimulationResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Ruleset::Basic),
            "experimental" => Ok(Ruleset::Experimental),
            _ => Err(SimulationError::UnknownRuleset(s.to_string())),
        }
    }
}

/// Outcome of evaluating one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transition {
    pub next: Cell,
    /// Whether a random draw was consumed
    pub drew: bool,
}

/// Evaluate one cell, reporting whether a draw was consumed
pub(crate) fn transition<R: RandomSource + ?Sized>(
    grid: &Grid,
    row: usize,
    col: usize,
    ruleset: Ruleset,
    rng: &mut R,
) -> SimulationResult<Transition> {
    let current = grid.get(row, col)?;
    let neighbors = grid.count_in(row, col, ruleset.neighborhood())?;

    Ok(match ruleset {
        Ruleset::Basic => Transition {
            next: basic::next_cell(current, neighbors),
            drew: false,
        },
        Ruleset::Experimental => experimental::next_cell(current, neighbors, rng),
    })
}

/// Next state of the cell at `(row, col)` under `ruleset`
///
/// Reads only `grid`; never mutates it. Under `Experimental`, an alive cell
/// with four or more neighbors consumes exactly one draw from `rng`. No
/// other case draws.
///
/// # Errors
///
/// `IndexOutOfRange` if the position is outside the grid.
///
/// # Example
///
/// ```rust
/// use life_simulator_core_rs::{next_state, Cell, Grid, RngManager, Ruleset};
///
/// let grid = Grid::from_rows(&[[0u8, 1, 0], [1, 0, 1], [0, 0, 0]]).unwrap();
/// let mut rng = RngManager::new(1);
/// let born = next_state(&grid, 1, 1, Ruleset::Basic, &mut rng).unwrap();
/// assert_eq!(born, Cell::Alive);
/// ```
pub fn next_state<R: RandomSource + ?Sized>(
    grid: &Grid,
    row: usize,
    col: usize,
    ruleset: Ruleset,
    rng: &mut R,
) -> SimulationResult<Cell> {
    Ok(transition(grid, row, col, ruleset, rng)?.next)
}
