//! Luminance sources for image-derived initial conditions
//!
//! A source yields a rectangular matrix of 8-bit luminance values, one row
//! per image row. Turning luminance into cells is the grid's job
//! (`Grid::from_luminance`), not the source's.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::core::{SimulationError, SimulationResult};

/// Supplies a 2D grayscale luminance matrix (0 = black, 255 = white)
pub trait LuminanceSource {
    /// Decode the luminance rows
    ///
    /// # Errors
    ///
    /// `UnreadableSource` when the underlying data cannot be read or decoded.
    fn luminance(&self) -> SimulationResult<Vec<Vec<u8>>>;

    /// Human-readable name for logs
    fn describe(&self) -> String;
}

/// Image file on disk, any format the `image` crate can decode
#[derive(Debug, Clone)]
pub struct ImageFileSource {
    path: PathBuf,
}

impl ImageFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LuminanceSource for ImageFileSource {
    fn luminance(&self) -> SimulationResult<Vec<Vec<u8>>> {
        let img = image::open(&self.path).map_err(|e| {
            SimulationError::UnreadableSource(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(luma_rows(img))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Encoded image held in memory
#[derive(Debug, Clone)]
pub struct ImageBytesSource {
    bytes: Vec<u8>,
}

impl ImageBytesSource {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl LuminanceSource for ImageBytesSource {
    fn luminance(&self) -> SimulationResult<Vec<Vec<u8>>> {
        let img = image::load_from_memory(&self.bytes)
            .map_err(|e| SimulationError::UnreadableSource(e.to_string()))?;
        Ok(luma_rows(img))
    }

    fn describe(&self) -> String {
        format!("<{} bytes in memory>", self.bytes.len())
    }
}

/// Already-decoded luminance rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceMatrix {
    rows: Vec<Vec<u8>>,
}

impl LuminanceMatrix {
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }
}

impl LuminanceSource for LuminanceMatrix {
    fn luminance(&self) -> SimulationResult<Vec<Vec<u8>>> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("<luminance matrix, {} rows>", self.rows.len())
    }
}

fn luma_rows(img: DynamicImage) -> Vec<Vec<u8>> {
    let gray = img.to_luma8();
    let width = gray.width() as usize;
    if width == 0 {
        return Vec::new();
    }
    gray.as_raw().chunks(width).map(<[u8]>::to_vec).collect()
}
