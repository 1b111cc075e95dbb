//! Simulation Engine
//!
//! Owns the grid, the generation clock, the population history and the RNG,
//! and advances the automaton one generation at a time.
//!
//! # Architecture
//!
//! ```text
//! For each advance:
//! 1. Evaluate every cell against the CURRENT grid (row-major)
//! 2. Write results into the back buffer
//! 3. Swap buffers (the new generation becomes visible all at once)
//! 4. Advance the generation clock
//! 5. Record the new population
//! ```
//!
//! # Critical Invariants
//!
//! - **Double buffering**: no evaluation ever observes a partially updated grid
//! - **Fixed shape**: an advance never changes height or width
//! - **Validate first**: failing operations leave grid, history and RNG untouched
//! - **Determinism**: same seed + same calls ⇒ same grids
//!
//! # Example
//!
//! ```rust
//! use life_simulator_core_rs::{Engine, Ruleset};
//!
//! let mut engine = Engine::with_seed(20, 20, 12345).unwrap();
//! engine.randomize(0.33).unwrap();
//! engine.record_count();
//!
//! for _ in 0..10 {
//!     let report = engine.advance(Ruleset::Basic).unwrap();
//!     println!("generation {}: {} alive", report.generation, report.population);
//! }
//!
//! assert_eq!(engine.generation_count(), 10);
//! assert_eq!(engine.population_history().len(), 11);
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::core::{GenerationClock, SimulationResult};
use crate::engine::config::{InitialCondition, SimulationConfig};
use crate::io::{ImageFileSource, LuminanceSource};
use crate::models::{Cell, Grid, PopulationHistory};
use crate::rng::{RandomSource, RngManager};
use crate::rules::{self, Ruleset};

/// Summary of one completed generation advance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Generation number after the advance
    pub generation: usize,

    /// Alive cells in the new grid
    pub population: usize,

    /// Cells that went dead → alive
    pub births: usize,

    /// Cells that went alive → dead
    pub deaths: usize,

    /// Random draws consumed by the rule evaluation
    pub rng_draws: usize,
}

/// Cellular automaton engine
///
/// Generic over its random source so tests can inject fixed sequences.
/// Defaults to [`RngManager`].
#[derive(Debug, Clone)]
pub struct Engine<R: RandomSource = RngManager> {
    /// Current generation
    grid: Grid,

    /// Back buffer, same shape as `grid`, contents meaningless between advances
    back: Grid,

    clock: GenerationClock,
    history: PopulationHistory,
    rng: R,

    /// Seed last applied through `set_seed` (or the constructor)
    seed: Option<i64>,
}

impl Engine<RngManager> {
    /// All-dead engine with an entropy-seeded RNG
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either dimension is zero.
    pub fn new(height: usize, width: usize) -> SimulationResult<Self> {
        Ok(Self::with_rng(
            Grid::new_empty(height, width)?,
            RngManager::from_entropy(),
        ))
    }

    /// All-dead engine with a reproducible RNG
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if either dimension is zero
    /// - `Configuration` if the seed is negative
    pub fn with_seed(height: usize, width: usize, seed: i64) -> SimulationResult<Self> {
        let grid = Grid::new_empty(height, width)?;
        let mut engine = Self::with_rng(grid, RngManager::new(1));
        engine.set_seed(seed)?;
        Ok(engine)
    }

    /// Adopt an existing grid, entropy-seeded
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_rng(grid, RngManager::from_entropy())
    }

    /// Build and initialize an engine from configuration
    ///
    /// Order of operations (which fixes the draw sequence):
    /// 1. Validate the whole config
    /// 2. Seed the RNG
    /// 3. Apply the initial condition
    /// 4. Apply noise
    /// 5. Record the generation-0 population (if requested)
    pub fn from_config(config: &SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let rng = match config.rng_seed {
            Some(seed) => {
                let mut rng = RngManager::new(1);
                rng.set_seed(seed)?;
                rng
            }
            None => RngManager::from_entropy(),
        };

        let grid = match &config.initial_condition {
            InitialCondition::Image { path } => {
                Grid::from_luminance(&ImageFileSource::new(path).luminance()?)?
            }
            _ => Grid::new_empty(config.height, config.width)?,
        };

        let mut engine = Self::with_rng(grid, rng);
        engine.seed = config.rng_seed;

        if let InitialCondition::Random { p_live } = config.initial_condition {
            engine.randomize(p_live)?;
        }
        if let Some(noise) = config.noise {
            engine.add_noise(noise.p_noise, noise.p_live)?;
        }
        if config.record_initial {
            engine.record_count();
        }

        info!(
            height = engine.height(),
            width = engine.width(),
            seed = ?engine.seed,
            population = engine.alive_count(),
            "engine built from config"
        );
        Ok(engine)
    }
}

impl<R: RandomSource> Engine<R> {
    /// Adopt `grid` and drive randomness from `rng`
    pub fn with_rng(grid: Grid, rng: R) -> Self {
        Self {
            back: grid.clone(),
            grid,
            clock: GenerationClock::new(),
            history: PopulationHistory::new(),
            rng,
            seed: None,
        }
    }

    /// Rebuild from previously captured parts
    pub(crate) fn from_parts(
        grid: Grid,
        generation: usize,
        history: PopulationHistory,
        rng: R,
        seed: Option<i64>,
    ) -> Self {
        Self {
            back: grid.clone(),
            grid,
            clock: GenerationClock::resumed_at(generation),
            history,
            rng,
            seed,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Completed advances since construction
    pub fn generation_count(&self) -> usize {
        self.clock.current()
    }

    pub fn clock(&self) -> &GenerationClock {
        &self.clock
    }

    pub fn population_history(&self) -> &PopulationHistory {
        &self.history
    }

    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Mutable access to the random source
    ///
    /// Drawing from it directly shifts every later draw of the engine.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // ========================================================================
    // Seeding & initialization
    // ========================================================================

    /// Reseed the engine's RNG
    ///
    /// # Errors
    ///
    /// `Configuration` if the source rejects the seed; nothing changes then.
    pub fn set_seed(&mut self, seed: i64) -> SimulationResult<()> {
        self.rng.set_seed(seed)?;
        self.seed = Some(seed);
        info!(seed, "rng seeded");
        Ok(())
    }

    /// Set a single cell of the current grid
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> SimulationResult<()> {
        self.grid.set(row, col, cell)
    }

    /// Overwrite every cell: alive with probability `p_live`
    ///
    /// One draw per cell, row-major. See [`Grid::randomize`].
    pub fn randomize(&mut self, p_live: f64) -> SimulationResult<()> {
        self.grid.randomize(p_live, &mut self.rng)?;
        debug!(p_live, population = self.grid.alive_count(), "grid randomized");
        Ok(())
    }

    /// Re-roll a random subset of cells. See [`Grid::add_noise`].
    pub fn add_noise(&mut self, p_noise: f64, p_live: f64) -> SimulationResult<()> {
        self.grid.add_noise(p_noise, p_live, &mut self.rng)?;
        debug!(
            p_noise,
            p_live,
            population = self.grid.alive_count(),
            "noise added"
        );
        Ok(())
    }

    /// Replace the grid with one derived from image luminance
    ///
    /// Only pure white is dead. The grid takes the image's shape. Generation
    /// count and history are kept.
    ///
    /// # Errors
    ///
    /// - `UnreadableSource` if decoding fails
    /// - `InvalidDimensions` if the decoded matrix is empty or ragged
    ///
    /// The current grid is untouched on error.
    pub fn initialize_from_image<S: LuminanceSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> SimulationResult<()> {
        let grid = Grid::from_luminance(&source.luminance()?)?;
        info!(
            source = %source.describe(),
            height = grid.height(),
            width = grid.width(),
            population = grid.alive_count(),
            "grid initialized from image"
        );
        self.replace_grid(grid);
        Ok(())
    }

    /// Swap in a whole new grid, possibly of a different shape
    pub fn replace_grid(&mut self, grid: Grid) {
        self.back = grid.clone();
        self.grid = grid;
    }

    // ========================================================================
    // Local queries
    // ========================================================================

    /// Neighbor count of `(row, col)` in the current grid
    pub fn count_neighbors(
        &self,
        row: usize,
        col: usize,
        use_diagonals: bool,
    ) -> SimulationResult<usize> {
        self.grid.count_neighbors(row, col, use_diagonals)
    }

    /// Next state of one cell, drawing from the engine's RNG if needed
    pub fn next_state(&mut self, row: usize, col: usize, ruleset: Ruleset) -> SimulationResult<Cell> {
        rules::next_state(&self.grid, row, col, ruleset, &mut self.rng)
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    /// Advance one generation under `ruleset`
    ///
    /// Every evaluation reads the pre-advance grid; results land in the back
    /// buffer, which then becomes the current grid.
    pub fn advance(&mut self, ruleset: Ruleset) -> SimulationResult<GenerationReport> {
        let (height, width) = self.grid.dimensions();
        let mut births = 0;
        let mut deaths = 0;
        let mut rng_draws = 0;

        {
            let current = &self.grid;
            let next = self.back.cells_mut();
            for row in 0..height {
                for col in 0..width {
                    let t = rules::transition(current, row, col, ruleset, &mut self.rng)?;
                    let before = current.cells()[row * width + col];
                    match (before, t.next) {
                        (Cell::Dead, Cell::Alive) => births += 1,
                        (Cell::Alive, Cell::Dead) => deaths += 1,
                        _ => {}
                    }
                    if t.drew {
                        rng_draws += 1;
                    }
                    next[row * width + col] = t.next;
                }
            }
        }

        std::mem::swap(&mut self.grid, &mut self.back);
        self.clock.advance();
        let population = self.grid.alive_count();
        self.history.record(population);

        let report = GenerationReport {
            generation: self.clock.current(),
            population,
            births,
            deaths,
            rng_draws,
        };
        debug!(
            generation = report.generation,
            %ruleset,
            population,
            births,
            deaths,
            rng_draws,
            "generation advanced"
        );
        Ok(report)
    }

    /// Advance `n` generations, reporting `(i, n)` after each step
    ///
    /// `n == 0` changes nothing.
    pub fn advance_n(
        &mut self,
        n: usize,
        ruleset: Ruleset,
        mut on_progress: Option<&mut dyn FnMut(usize, usize)>,
    ) -> SimulationResult<Vec<GenerationReport>> {
        let mut reports = Vec::with_capacity(n);
        for i in 1..=n {
            reports.push(self.advance(ruleset)?);
            if let Some(callback) = on_progress.as_deref_mut() {
                callback(i, n);
            }
        }
        Ok(reports)
    }

    // ========================================================================
    // Population bookkeeping
    // ========================================================================

    /// Alive cells in the current grid, recomputed on every call
    pub fn alive_count(&self) -> usize {
        self.grid.alive_count()
    }

    /// Append the current alive count to the history
    pub fn record_count(&mut self) -> usize {
        let count = self.alive_count();
        self.history.record(count);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_buffer_tracks_replaced_shape() {
        let mut engine = Engine::with_seed(2, 2, 1).unwrap();
        engine.replace_grid(Grid::new_empty(3, 5).unwrap());
        assert_eq!(engine.back.dimensions(), (3, 5));
        engine.advance(Ruleset::Basic).unwrap();
        assert_eq!(engine.grid().dimensions(), (3, 5));
    }

    #[test]
    fn test_with_seed_rejects_negative() {
        assert!(Engine::with_seed(2, 2, -1).is_err());
    }

    #[test]
    fn test_report_counts_births_and_deaths() {
        // Horizontal blinker of three under Basic rules: ends die (1
        // neighbor), center survives (2), cells above/below center are born.
        let grid = Grid::from_rows(&[[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
        let mut engine = Engine::with_rng(grid, RngManager::new(1));
        let report = engine.advance(Ruleset::Basic).unwrap();
        assert_eq!(report.deaths, 2);
        assert_eq!(report.births, 0);
        assert_eq!(report.population, 1);
        assert_eq!(report.rng_draws, 0);
    }
}
