//! Population history
//!
//! Chronological record of alive-cell counts. Entries are only ever
//! appended: never reordered, never pruned.

use serde::{Deserialize, Serialize};

/// Alive-cell counts in the order they were recorded
///
/// # Example
///
/// ```rust
/// use life_simulator_core_rs::PopulationHistory;
///
/// let mut history = PopulationHistory::new();
/// history.record(40);
/// history.record(20);
/// assert_eq!(history.as_slice(), &[40, 20]);
/// assert_eq!(history.normalized(), Some(vec![1.0, 0.5]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopulationHistory {
    counts: Vec<usize>,
}

impl PopulationHistory {
    pub fn new() -> Self {
        Self { counts: Vec::new() }
    }

    /// Append a count
    pub fn record(&mut self, count: usize) {
        self.counts.push(count);
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// First recorded count
    pub fn initial(&self) -> Option<usize> {
        self.counts.first().copied()
    }

    /// Most recent count
    pub fn last(&self) -> Option<usize> {
        self.counts.last().copied()
    }

    /// Every entry divided by the first one
    ///
    /// Returns `None` when there is nothing to normalize against (empty
    /// history or a first entry of zero).
    pub fn normalized(&self) -> Option<Vec<f64>> {
        let first = self.initial().filter(|&c| c > 0)? as f64;
        Some(self.counts.iter().map(|&c| c as f64 / first).collect())
    }

    /// Counts as `f64`, unnormalized
    pub fn as_f64(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| c as f64).collect()
    }
}

impl From<Vec<usize>> for PopulationHistory {
    fn from(counts: Vec<usize>) -> Self {
        Self { counts }
    }
}
