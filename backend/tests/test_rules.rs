//! Transition rule tests
//!
//! Basic rules never draw. Experimental rules draw exactly once per alive
//! cell with four or more Moore neighbors.

use life_simulator_core_rs::{
    next_state, Cell, Grid, RandomSource, Ruleset, SimulationError, SimulationResult,
    OVERPOPULATION_DEATH_PROBABILITY,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Always returns the same draw and counts how often it was asked
struct Fixed {
    value: f64,
    draws: usize,
}

impl Fixed {
    fn new(value: f64) -> Self {
        Self { value, draws: 0 }
    }
}

impl RandomSource for Fixed {
    fn set_seed(&mut self, _seed: i64) -> SimulationResult<()> {
        Ok(())
    }

    fn next_uniform(&mut self) -> f64 {
        self.draws += 1;
        self.value
    }
}

/// 3x3 grid whose center has the given state and whose first `n`
/// neighbors (in a fixed order) are alive
fn centered(center: u8, n: usize) -> Grid {
    const ORDER: [(usize, usize); 8] = [
        (0, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (0, 0),
        (0, 2),
        (2, 0),
        (2, 2),
    ];
    let mut rows = vec![vec![0u8; 3]; 3];
    rows[1][1] = center;
    for &(r, c) in ORDER.iter().take(n) {
        rows[r][c] = 1;
    }
    Grid::from_rows(&rows).unwrap()
}

// ============================================================================
// Basic
// ============================================================================

#[test]
fn test_basic_table() {
    // Only orthogonal neighbors count: first four entries of ORDER
    let expected_alive = [false, false, true, true, false];
    let expected_dead = [false, false, false, true, false];

    for n in 0..=4 {
        let mut rng = Fixed::new(0.0);
        let alive = next_state(&centered(1, n), 1, 1, Ruleset::Basic, &mut rng).unwrap();
        let dead = next_state(&centered(0, n), 1, 1, Ruleset::Basic, &mut rng).unwrap();

        assert_eq!(alive.is_alive(), expected_alive[n], "alive with {} neighbors", n);
        assert_eq!(dead.is_alive(), expected_dead[n], "dead with {} neighbors", n);
        assert_eq!(rng.draws, 0, "Basic rules must never draw");
    }
}

#[test]
fn test_basic_ignores_diagonals() {
    // Center dead with three diagonal neighbors: Basic sees 0
    let grid = Grid::from_rows(&[[1u8, 0, 1], [0, 0, 0], [1, 0, 0]]).unwrap();
    let mut rng = Fixed::new(0.0);
    assert_eq!(
        next_state(&grid, 1, 1, Ruleset::Basic, &mut rng).unwrap(),
        Cell::Dead
    );
}

#[test]
fn test_next_state_does_not_mutate_grid() {
    let grid = centered(0, 3);
    let before = grid.clone();
    let mut rng = Fixed::new(0.0);
    next_state(&grid, 1, 1, Ruleset::Basic, &mut rng).unwrap();
    next_state(&grid, 1, 1, Ruleset::Experimental, &mut rng).unwrap();
    assert_eq!(grid, before);
}

// ============================================================================
// Experimental
// ============================================================================

#[test]
fn test_experimental_underpopulation_and_survival() {
    for (n, alive) in [(0, false), (1, false), (2, true), (3, true)] {
        let mut rng = Fixed::new(0.0);
        let next = next_state(&centered(1, n), 1, 1, Ruleset::Experimental, &mut rng).unwrap();
        assert_eq!(next.is_alive(), alive, "{} neighbors", n);
        assert_eq!(rng.draws, 0);
    }
}

#[test]
fn test_experimental_overpopulation_low_draw_dies() {
    for n in 4..=8 {
        let mut rng = Fixed::new(0.0);
        let next = next_state(&centered(1, n), 1, 1, Ruleset::Experimental, &mut rng).unwrap();
        assert_eq!(next, Cell::Dead);
        assert_eq!(rng.draws, 1);
    }
}

#[test]
fn test_experimental_overpopulation_high_draw_survives() {
    let mut rng = Fixed::new(0.99);
    let next = next_state(&centered(1, 8), 1, 1, Ruleset::Experimental, &mut rng).unwrap();
    assert_eq!(next, Cell::Alive);
    assert_eq!(rng.draws, 1);
}

#[test]
fn test_experimental_death_probability_boundary() {
    let mut below = Fixed::new(OVERPOPULATION_DEATH_PROBABILITY - 1e-9);
    let mut at = Fixed::new(OVERPOPULATION_DEATH_PROBABILITY);

    let grid = centered(1, 5);
    assert_eq!(
        next_state(&grid, 1, 1, Ruleset::Experimental, &mut below).unwrap(),
        Cell::Dead
    );
    assert_eq!(
        next_state(&grid, 1, 1, Ruleset::Experimental, &mut at).unwrap(),
        Cell::Alive
    );
}

#[test]
fn test_experimental_birth_on_three_or_four() {
    for n in 0..=8 {
        let mut rng = Fixed::new(0.0);
        let next = next_state(&centered(0, n), 1, 1, Ruleset::Experimental, &mut rng).unwrap();
        assert_eq!(next.is_alive(), n == 3 || n == 4, "{} neighbors", n);
        assert_eq!(rng.draws, 0, "dead cells never draw");
    }
}

// ============================================================================
// Ruleset selection
// ============================================================================

#[test]
fn test_unknown_ruleset_name() {
    let err = "seeds".parse::<Ruleset>().unwrap_err();
    assert_eq!(err, SimulationError::UnknownRuleset("seeds".to_string()));
}

#[test]
fn test_next_state_out_of_range() {
    let grid = centered(0, 0);
    let mut rng = Fixed::new(0.0);
    let err = next_state(&grid, 0, 3, Ruleset::Basic, &mut rng).unwrap_err();
    assert!(matches!(err, SimulationError::IndexOutOfRange { .. }));
}
