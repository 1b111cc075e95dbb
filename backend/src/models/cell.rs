//! Binary cell state

use serde::{Deserialize, Serialize};

use crate::core::{SimulationError, SimulationResult};

/// State of a single grid cell
///
/// The numeric value (`Dead` = 0, `Alive` = 1) is what neighbor counts,
/// population counts and snapshots sum over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Numeric value of the cell (0 or 1)
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

impl TryFrom<u8> for Cell {
    type Error = SimulationError;

    fn try_from(value: u8) -> SimulationResult<Self> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            other => Err(SimulationError::InvalidParameter {
                name: "cell".to_string(),
                reason: format!("cell values must be 0 or 1, got {}", other),
            }),
        }
    }
}
