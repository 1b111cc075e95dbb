//! Grid - rectangular matrix of binary cells
//!
//! Cells are stored row-major in a flat vector. Dimensions are fixed at
//! construction; no operation on a `Grid` ever resizes it.
//!
//! # Critical Invariants
//!
//! 1. **Positive dimensions**: `height > 0` and `width > 0`
//! 2. **Binary cells**: every cell is `Cell::Dead` or `Cell::Alive`
//! 3. **Hard edges**: neighbors outside the grid count as dead (no wraparound)
//! 4. **Row-major draws**: randomization consumes draws rows outer, columns inner

use serde::Serialize;

use crate::core::error::check_probability;
use crate::core::{SimulationError, SimulationResult};
use crate::models::cell::Cell;
use crate::rng::RandomSource;

/// Which adjacent cells take part in a neighbor count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighborhood {
    /// Up, down, left, right
    VonNeumann,
    /// Orthogonal plus the four diagonals
    Moore,
}

impl Neighborhood {
    pub fn uses_diagonals(self) -> bool {
        matches!(self, Neighborhood::Moore)
    }
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

/// Rectangular grid of cells
///
/// # Example
///
/// ```rust
/// use life_simulator_core_rs::{Cell, Grid};
///
/// let mut grid = Grid::new_empty(3, 4).unwrap();
/// grid.set(1, 1, Cell::Alive).unwrap();
/// assert_eq!(grid.alive_count(), 1);
/// assert_eq!(grid.count_neighbors(0, 1, false).unwrap(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either dimension is zero.
    pub fn new_empty(height: usize, width: usize) -> SimulationResult<Self> {
        if height == 0 || width == 0 {
            return Err(SimulationError::InvalidDimensions(format!(
                "height and width must be positive, got {}x{}",
                height, width
            )));
        }
        Ok(Self {
            height,
            width,
            cells: vec![Cell::Dead; height * width],
        })
    }

    /// Adopt an existing matrix of 0/1 values
    ///
    /// Height and width are taken from the matrix shape.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` if the matrix is empty or ragged
    /// - `InvalidParameter` if a value is neither 0 nor 1
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> SimulationResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(SimulationError::InvalidDimensions(
                "matrix must have at least one row and one column".to_string(),
            ));
        }

        let mut cells = Vec::with_capacity(height * width);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(SimulationError::InvalidDimensions(format!(
                    "row {} has {} columns, expected {}",
                    row_idx,
                    row.len(),
                    width
                )));
            }
            for &value in row {
                cells.push(Cell::try_from(value)?);
            }
        }

        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Build a grid from a flat row-major cell vector
    pub(crate) fn from_cells(
        height: usize,
        width: usize,
        cells: Vec<Cell>,
    ) -> SimulationResult<Self> {
        if height == 0 || width == 0 || cells.len() != height * width {
            return Err(SimulationError::InvalidDimensions(format!(
                "{} cells cannot form a {}x{} grid",
                cells.len(),
                height,
                width
            )));
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Flat row-major view of all cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Copy out as a matrix of 0/1 values
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.value()).collect())
            .collect()
    }

    /// Get a cell
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row >= height` or `col >= width`.
    pub fn get(&self, row: usize, col: usize) -> SimulationResult<Cell> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    pub fn is_alive(&self, row: usize, col: usize) -> SimulationResult<bool> {
        Ok(self.get(row, col)?.is_alive())
    }

    /// Set a cell
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `row >= height` or `col >= width`.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> SimulationResult<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Number of alive cells, recomputed on every call
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn index(&self, row: usize, col: usize) -> SimulationResult<usize> {
        if row >= self.height || col >= self.width {
            return Err(SimulationError::IndexOutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// Value of the cell at a signed offset, 0 when outside the grid
    fn value_at_offset(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> usize {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            return 0;
        };
        if r >= self.height || c >= self.width {
            return 0;
        }
        self.cells[r * self.width + c].value() as usize
    }

    // ========================================================================
    // Neighbor counting
    // ========================================================================

    /// Count alive neighbors of `(row, col)`
    ///
    /// Sums the orthogonal neighbors inside the grid and, when
    /// `use_diagonals` is set, the diagonal ones as well. Neighbors beyond
    /// the edges contribute 0.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the position itself is outside the grid.
    pub fn count_neighbors(
        &self,
        row: usize,
        col: usize,
        use_diagonals: bool,
    ) -> SimulationResult<usize> {
        self.index(row, col)?;

        let orthogonal: usize = ORTHOGONAL
            .iter()
            .map(|&offset| self.value_at_offset(row, col, offset))
            .sum();
        if !use_diagonals {
            return Ok(orthogonal);
        }
        let diagonal: usize = DIAGONAL
            .iter()
            .map(|&offset| self.value_at_offset(row, col, offset))
            .sum();
        Ok(orthogonal + diagonal)
    }

    /// Count alive neighbors using a named neighborhood
    pub fn count_in(
        &self,
        row: usize,
        col: usize,
        neighborhood: Neighborhood,
    ) -> SimulationResult<usize> {
        self.count_neighbors(row, col, neighborhood.uses_diagonals())
    }

    // ========================================================================
    // Initialization
    // ========================================================================

    /// Overwrite every cell: alive iff a fresh draw is `< p_live`
    ///
    /// Consumes exactly one draw per cell in row-major order.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if `p_live` is outside [0, 1]. Nothing is drawn
    /// or written in that case.
    pub fn randomize<R: RandomSource + ?Sized>(
        &mut self,
        p_live: f64,
        rng: &mut R,
    ) -> SimulationResult<()> {
        check_probability("p_live", p_live)?;

        for cell in self.cells.iter_mut() {
            *cell = Cell::from(rng.next_uniform() < p_live);
        }
        Ok(())
    }

    /// Sparse overwrite: each cell is re-rolled with probability `p_noise`
    ///
    /// For every cell in row-major order one draw decides whether the cell
    /// is touched; touched cells take a second draw and become alive iff it
    /// is `< p_live`. Untouched cells keep their value.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if either probability is outside [0, 1].
    pub fn add_noise<R: RandomSource + ?Sized>(
        &mut self,
        p_noise: f64,
        p_live: f64,
        rng: &mut R,
    ) -> SimulationResult<()> {
        check_probability("p_noise", p_noise)?;
        check_probability("p_live", p_live)?;

        for cell in self.cells.iter_mut() {
            if rng.next_uniform() < p_noise {
                *cell = Cell::from(rng.next_uniform() < p_live);
            }
        }
        Ok(())
    }

    /// Build a grid from 8-bit luminance rows
    ///
    /// Only pure white (255) maps to a dead cell. Every darker value is
    /// alive: `cell = 1 - luminance / 255` with integer division.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if the matrix is empty or ragged.
    pub fn from_luminance<R: AsRef<[u8]>>(rows: &[R]) -> SimulationResult<Self> {
        let cells: Vec<Vec<u8>> = rows
            .iter()
            .map(|row| row.as_ref().iter().map(|&l| 1 - l / 255).collect())
            .collect();
        Self::from_rows(&cells)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
