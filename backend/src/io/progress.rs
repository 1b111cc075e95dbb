//! Textual progress bar
//!
//! Format: `\r{prefix} |{bar}| {percent}% {suffix}`, redrawn in place with a
//! carriage return; a newline follows the final iteration.

use std::io::{self, Write};

/// Progress bar for `(current, total)` updates
///
/// # Example
/// ```
/// use life_simulator_core_rs::io::ProgressBar;
///
/// let bar = ProgressBar::new(4).with_length(8);
/// assert_eq!(bar.line(1), "Progress: |██------| 25.0% ");
/// ```
#[derive(Debug, Clone)]
pub struct ProgressBar {
    total: usize,
    prefix: String,
    suffix: String,
    decimals: usize,
    length: usize,
    fill: char,
    empty: char,
}

impl ProgressBar {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            prefix: "Progress:".to_string(),
            suffix: String::new(),
            decimals: 1,
            length: 30,
            fill: '█',
            empty: '-',
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// The bar text for `iteration`, without carriage return or newline
    ///
    /// A zero total renders as complete. Iterations past the total are
    /// clamped.
    pub fn line(&self, iteration: usize) -> String {
        let (done, total) = if self.total == 0 {
            (1, 1)
        } else {
            (iteration.min(self.total), self.total)
        };
        let percent = 100.0 * done as f64 / total as f64;
        let filled = self.length * done / total;

        let bar: String = std::iter::repeat(self.fill)
            .take(filled)
            .chain(std::iter::repeat(self.empty).take(self.length - filled))
            .collect();

        format!(
            "{} |{}| {:.*}% {}",
            self.prefix, bar, self.decimals, percent, self.suffix
        )
    }

    /// Redraw the bar on `out`
    pub fn draw<W: Write>(&self, out: &mut W, iteration: usize) -> io::Result<()> {
        write!(out, "\r{}", self.line(iteration))?;
        if iteration >= self.total {
            writeln!(out)?;
        }
        out.flush()
    }

    /// Redraw the bar on stderr, ignoring terminal errors
    pub fn print(&self, iteration: usize) {
        let _ = self.draw(&mut io::stderr(), iteration);
    }
}
