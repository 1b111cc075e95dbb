//! Checkpoint - Save/Load Engine State
//!
//! Enables serialization and deserialization of complete engine state
//! for pause/resume functionality.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored engine continues the exact RNG stream, so it
//!   produces the same future generations as the engine it was captured from
//! - **Grid Integrity**: the SHA256 of the cells must match `grid_hash`
//! - **Shape Consistency**: `cells.len() == height * width`
//! - **History Bound**: at most one history entry per generation plus the
//!   initial capture

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use crate::core::{SimulationError, SimulationResult};
use crate::engine::simulation::Engine;
use crate::models::{Cell, Grid, PopulationHistory};
use crate::rng::RngManager;

/// Complete engine state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Completed advances at capture time
    pub generation_count: usize,

    pub height: usize,
    pub width: usize,

    /// Row-major cell values, 0 or 1
    pub cells: Vec<u8>,

    pub population_history: Vec<usize>,

    /// RNG state at capture time (CRITICAL for determinism)
    pub rng_state: u64,

    /// Seed the run was started with, informational
    pub rng_seed: Option<i64>,

    /// Hex SHA256 of `cells`
    pub grid_hash: String,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> SimulationResult<String> {
        serde_json::to_string(self).map_err(|e| {
            SimulationError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }

    pub fn from_json(json: &str) -> SimulationResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            SimulationError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }
}

// ============================================================================
// Hashing
// ============================================================================

/// Compute the hex SHA256 of row-major cell values
pub fn compute_grid_hash(cells: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(cells);
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// Validation
// ============================================================================

/// Validate snapshot integrity
///
/// Checks:
/// - positive dimensions and matching cell count
/// - binary cell values
/// - grid hash
/// - history length bound
pub fn validate_snapshot(snapshot: &EngineSnapshot) -> SimulationResult<()> {
    // 1. Shape
    if snapshot.height == 0 || snapshot.width == 0 {
        return Err(SimulationError::StateValidation(format!(
            "Non-positive dimensions {}x{}",
            snapshot.height, snapshot.width
        )));
    }
    let expected = snapshot.height * snapshot.width;
    if snapshot.cells.len() != expected {
        return Err(SimulationError::StateValidation(format!(
            "Cell count mismatch: expected {}, got {}",
            expected,
            snapshot.cells.len()
        )));
    }

    // 2. Binary cells
    if let Some(pos) = snapshot.cells.iter().position(|&v| v > 1) {
        return Err(SimulationError::StateValidation(format!(
            "Non-binary cell value {} at index {}",
            snapshot.cells[pos], pos
        )));
    }

    // 3. Hash
    let actual = compute_grid_hash(&snapshot.cells);
    if actual != snapshot.grid_hash {
        return Err(SimulationError::StateValidation(format!(
            "Grid hash mismatch: expected {}, got {}",
            snapshot.grid_hash, actual
        )));
    }

    // 4. History bound
    if snapshot.population_history.len() > snapshot.generation_count + 1 {
        return Err(SimulationError::StateValidation(format!(
            "History has {} entries for {} generations",
            snapshot.population_history.len(),
            snapshot.generation_count
        )));
    }

    Ok(())
}

// ============================================================================
// Engine integration
// ============================================================================

impl Engine<RngManager> {
    /// Capture the complete engine state
    pub fn snapshot(&self) -> EngineSnapshot {
        let cells: Vec<u8> = self.grid().cells().iter().map(|c| c.value()).collect();
        EngineSnapshot {
            generation_count: self.generation_count(),
            height: self.height(),
            width: self.width(),
            grid_hash: compute_grid_hash(&cells),
            cells,
            population_history: self.population_history().as_slice().to_vec(),
            rng_state: self.rng().get_state(),
            rng_seed: self.seed(),
        }
    }

    /// Rebuild an engine from a validated snapshot
    ///
    /// # Errors
    ///
    /// `StateValidation` if any integrity check fails.
    pub fn restore(snapshot: EngineSnapshot) -> SimulationResult<Self> {
        validate_snapshot(&snapshot)?;

        let cells = snapshot
            .cells
            .iter()
            .map(|&v| Cell::try_from(v))
            .collect::<SimulationResult<Vec<Cell>>>()?;
        let grid = Grid::from_cells(snapshot.height, snapshot.width, cells)?;

        info!(
            generation = snapshot.generation_count,
            height = snapshot.height,
            width = snapshot.width,
            "engine restored from snapshot"
        );

        Ok(Engine::from_parts(
            grid,
            snapshot.generation_count,
            PopulationHistory::from(snapshot.population_history),
            RngManager::new(snapshot.rng_state),
            snapshot.rng_seed,
        ))
    }
}
