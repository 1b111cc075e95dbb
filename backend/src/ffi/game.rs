//! PyO3 wrapper for Engine
//!
//! # Example (from Python)
//!
//! ```python
//! from life_simulator_core_rs import Game
//!
//! game = Game(height=20, length=20)
//! game.set_seed(12345)
//! game.randomize_grid(0.33)
//! game.save_cellcount()
//! game.timestepping(100, rules="experimental")
//! print(game.n_cells_over_time())
//! ```

use std::path::PathBuf;

use pyo3::prelude::*;

use super::to_py_err;
use crate::engine::Engine;
use crate::io::{ConsoleRenderer, GridSink, ImageFileSource, ProgressBar, RasterExporter};
use crate::models::Grid;
use crate::rules::Ruleset;

/// Python wrapper for the Rust engine
#[pyclass(name = "Game")]
pub struct PyGame {
    inner: Engine,
}

#[pymethods]
impl PyGame {
    /// Create an empty `height` × `length` game, or adopt `starting_grid`
    #[new]
    #[pyo3(signature = (height = 20, length = 30, starting_grid = None))]
    fn new(height: usize, length: usize, starting_grid: Option<Vec<Vec<u8>>>) -> PyResult<Self> {
        let inner = match starting_grid {
            Some(rows) => Engine::from_grid(Grid::from_rows(&rows).map_err(to_py_err)?),
            None => Engine::new(height, length).map_err(to_py_err)?,
        };
        Ok(Self { inner })
    }

    fn set_seed(&mut self, seed: i64) -> PyResult<()> {
        self.inner.set_seed(seed).map_err(to_py_err)
    }

    #[pyo3(signature = (p_live = 0.1))]
    fn randomize_grid(&mut self, p_live: f64) -> PyResult<()> {
        self.inner.randomize(p_live).map_err(to_py_err)
    }

    #[pyo3(signature = (p_noise = 0.001, p_live = 0.5))]
    fn add_noise_to_grid(&mut self, p_noise: f64, p_live: f64) -> PyResult<()> {
        self.inner.add_noise(p_noise, p_live).map_err(to_py_err)
    }

    fn initialize_with_image(&mut self, fname: PathBuf) -> PyResult<()> {
        self.inner
            .initialize_from_image(&ImageFileSource::new(fname))
            .map_err(to_py_err)
    }

    #[pyo3(signature = (row, col, use_diagonals = false))]
    fn count_neighbors(&self, row: usize, col: usize, use_diagonals: bool) -> PyResult<usize> {
        self.inner
            .count_neighbors(row, col, use_diagonals)
            .map_err(to_py_err)
    }

    #[pyo3(signature = (row, col, rules = "basic"))]
    fn next_state(&mut self, row: usize, col: usize, rules: &str) -> PyResult<u8> {
        let ruleset: Ruleset = rules.parse().map_err(to_py_err)?;
        let cell = self.inner.next_state(row, col, ruleset).map_err(to_py_err)?;
        Ok(cell.value())
    }

    #[pyo3(signature = (rules = "basic"))]
    fn timestep_grid(&mut self, rules: &str) -> PyResult<()> {
        let ruleset: Ruleset = rules.parse().map_err(to_py_err)?;
        self.inner.advance(ruleset).map_err(to_py_err)?;
        Ok(())
    }

    #[pyo3(signature = (n_timesteps, rules = "basic", show_progress = true))]
    fn timestepping(&mut self, n_timesteps: usize, rules: &str, show_progress: bool) -> PyResult<()> {
        let ruleset: Ruleset = rules.parse().map_err(to_py_err)?;
        let bar = ProgressBar::new(n_timesteps);
        let mut report = |i: usize, _n: usize| bar.print(i);
        let on_progress: Option<&mut dyn FnMut(usize, usize)> = if show_progress {
            bar.print(0);
            Some(&mut report as &mut dyn FnMut(usize, usize))
        } else {
            None
        };
        self.inner
            .advance_n(n_timesteps, ruleset, on_progress)
            .map_err(to_py_err)?;
        Ok(())
    }

    fn save_cellcount(&mut self) -> usize {
        self.inner.record_count()
    }

    #[getter]
    fn n_alive_cells(&self) -> usize {
        self.inner.alive_count()
    }

    #[getter]
    fn timesteps(&self) -> usize {
        self.inner.generation_count()
    }

    #[getter]
    fn height(&self) -> usize {
        self.inner.height()
    }

    #[getter]
    fn width(&self) -> usize {
        self.inner.width()
    }

    fn grid(&self) -> Vec<Vec<u8>> {
        self.inner.grid().to_rows()
    }

    fn n_cells_over_time(&self) -> Vec<usize> {
        self.inner.population_history().as_slice().to_vec()
    }

    #[pyo3(signature = (show_timestep = true))]
    fn print_to_console(&self, show_timestep: bool) -> PyResult<()> {
        ConsoleRenderer::new()
            .show_generation(show_timestep)
            .print(self.inner.grid(), self.inner.generation_count())
            .map_err(PyErr::from)
    }

    #[pyo3(signature = (savedir = PathBuf::from("timesteps"), scale = 4))]
    fn plot_image(&self, savedir: PathBuf, scale: u32) -> PyResult<()> {
        RasterExporter::new(savedir)
            .with_scale(scale)
            .write_grid(self.inner.grid(), self.inner.generation_count())
            .map_err(to_py_err)
    }
}
