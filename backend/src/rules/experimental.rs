//! Experimental ruleset over the Moore neighborhood
//!
//! | Current | Neighbors | Next                                   |
//! |---------|-----------|----------------------------------------|
//! | alive   | 0-1       | dead                                   |
//! | alive   | 2-3       | alive                                  |
//! | alive   | 4-8       | one draw `r`: dead if `r < 0.95`, else alive |
//! | dead    | 3 or 4    | alive                                  |
//! | dead    | other     | dead                                   |

use super::Transition;
use crate::models::Cell;
use crate::rng::RandomSource;

/// Probability that an overpopulated alive cell dies
pub const OVERPOPULATION_DEATH_PROBABILITY: f64 = 0.95;

pub(super) fn next_cell<R: RandomSource + ?Sized>(
    current: Cell,
    neighbors: usize,
    rng: &mut R,
) -> Transition {
    let settled = |next| Transition { next, drew: false };

    match (current, neighbors) {
        (Cell::Alive, 0..=1) => settled(Cell::Dead),
        (Cell::Alive, 2..=3) => settled(Cell::Alive),
        (Cell::Alive, _) => {
            let dies = rng.next_uniform() < OVERPOPULATION_DEATH_PROBABILITY;
            Transition {
                next: Cell::from(!dies),
                drew: true,
            }
        }
        (Cell::Dead, 3 | 4) => settled(Cell::Alive),
        (Cell::Dead, _) => settled(Cell::Dead),
    }
}
