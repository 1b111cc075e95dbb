//! Basic ruleset (Conway) over the orthogonal neighborhood
//!
//! | Current | Neighbors | Next  |
//! |---------|-----------|-------|
//! | alive   | 0-1       | dead  |
//! | alive   | 2-3       | alive |
//! | alive   | 4         | dead  |
//! | dead    | 3         | alive |
//! | dead    | other     | dead  |
//!
//! Deterministic: never draws.

use crate::models::Cell;

pub(super) fn next_cell(current: Cell, neighbors: usize) -> Cell {
    match (current, neighbors) {
        (Cell::Alive, 2..=3) => Cell::Alive,
        (Cell::Alive, _) => Cell::Dead,
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}
