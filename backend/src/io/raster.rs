//! Two-tone PNG snapshots
//!
//! One file per exported generation, named by zero-padded generation index
//! so a directory listing sorts chronologically:
//!
//! ```text
//! out/timestep_000000.png
//! out/timestep_000001.png
//! ```
//!
//! Alive cells are black, dead cells white.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use tracing::debug;

use crate::core::{SimulationError, SimulationResult};
use crate::models::Grid;

const ALIVE_LUMA: u8 = 0;
const DEAD_LUMA: u8 = 255;

/// Receives the grid of a given generation
pub trait GridSink {
    fn write_grid(&mut self, grid: &Grid, generation: usize) -> SimulationResult<()>;
}

/// File name of the snapshot for `generation`
///
/// # Example
/// ```
/// use life_simulator_core_rs::io::snapshot_file_name;
///
/// assert_eq!(snapshot_file_name(42), "timestep_000042.png");
/// ```
pub fn snapshot_file_name(generation: usize) -> String {
    format!("timestep_{:06}.png", generation)
}

/// Writes PNG snapshots into a directory
#[derive(Debug, Clone)]
pub struct RasterExporter {
    dir: PathBuf,
    /// Pixels per cell side
    scale: u32,
}

impl RasterExporter {
    /// Exporter writing into `dir`, one pixel per cell
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            scale: 1,
        }
    }

    /// Enlarge each cell to a `scale` × `scale` block (minimum 1)
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the snapshot of `generation` is written to
    pub fn path_for(&self, generation: usize) -> PathBuf {
        self.dir.join(snapshot_file_name(generation))
    }

    /// Render `grid` to an in-memory grayscale image
    pub fn render(&self, grid: &Grid) -> GrayImage {
        let (height, width) = grid.dimensions();
        let scale = self.scale;
        GrayImage::from_fn(width as u32 * scale, height as u32 * scale, |x, y| {
            let row = (y / scale) as usize;
            let col = (x / scale) as usize;
            let alive = grid.cells()[row * width + col].is_alive();
            Luma([if alive { ALIVE_LUMA } else { DEAD_LUMA }])
        })
    }
}

impl GridSink for RasterExporter {
    fn write_grid(&mut self, grid: &Grid, generation: usize) -> SimulationResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            SimulationError::Export(format!("cannot create {}: {}", self.dir.display(), e))
        })?;

        let path = self.path_for(generation);
        self.render(grid)
            .save(&path)
            .map_err(|e| SimulationError::Export(format!("{}: {}", path.display(), e)))?;

        debug!(generation, path = %path.display(), "wrote grid snapshot");
        Ok(())
    }
}
