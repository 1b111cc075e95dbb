//! Two-glyph text rendering of a grid

use std::io::{self, Write};

use crate::models::Grid;

/// Renders alive cells as `▩` and dead cells as `□`, each followed by a space
#[derive(Debug, Clone)]
pub struct ConsoleRenderer {
    alive: char,
    dead: char,
    show_generation: bool,
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self {
            alive: '\u{25A9}',
            dead: '\u{25A1}',
            show_generation: true,
        }
    }
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyphs(mut self, alive: char, dead: char) -> Self {
        self.alive = alive;
        self.dead = dead;
        self
    }

    /// Toggle the `timestep N` header line
    pub fn show_generation(mut self, show: bool) -> Self {
        self.show_generation = show;
        self
    }

    /// Render to a string, one line per grid row
    ///
    /// # Example
    /// ```
    /// use life_simulator_core_rs::{io::ConsoleRenderer, Grid};
    ///
    /// let grid = Grid::from_rows(&[[1u8, 0]]).unwrap();
    /// let text = ConsoleRenderer::new().with_glyphs('#', '.').render(&grid, 3);
    /// assert_eq!(text, "timestep 3\n# . \n");
    /// ```
    pub fn render(&self, grid: &Grid, generation: usize) -> String {
        let mut out = String::with_capacity((grid.width() * 2 + 1) * (grid.height() + 1));
        if self.show_generation {
            out.push_str(&format!("timestep {}\n", generation));
        }
        for row in grid.rows() {
            for cell in row {
                out.push(if cell.is_alive() { self.alive } else { self.dead });
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Write the rendering to `out`
    pub fn write_to<W: Write>(&self, out: &mut W, grid: &Grid, generation: usize) -> io::Result<()> {
        out.write_all(self.render(grid, generation).as_bytes())
    }

    /// Print to stdout
    pub fn print(&self, grid: &Grid, generation: usize) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_to(&mut lock, grid, generation)?;
        lock.flush()
    }
}
