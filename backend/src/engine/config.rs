//! Simulation configuration
//!
//! Describes how an engine is built: grid shape, seed, initial condition,
//! optional noise, and whether the generation-0 population is recorded.
//! Rulesets and run length are NOT part of it; they are chosen per advance.
//!
//! # Example
//!
//! ```rust
//! use life_simulator_core_rs::engine::{InitialCondition, SimulationConfig};
//!
//! let config: SimulationConfig = serde_json::from_str(r#"{
//!     "height": 20,
//!     "width": 20,
//!     "rng_seed": 12345,
//!     "initial_condition": { "type": "random", "p_live": 0.33 }
//! }"#).unwrap();
//!
//! assert_eq!(config.initial_condition, InitialCondition::Random { p_live: 0.33 });
//! assert!(config.record_initial);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::check_probability;
use crate::core::{SimulationError, SimulationResult};

/// How the grid is filled before the first advance
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InitialCondition {
    /// All cells dead
    #[default]
    Empty,
    /// Every cell alive with probability `p_live`
    Random { p_live: f64 },
    /// Derived from an image file; the image decides the grid shape
    Image { path: PathBuf },
}

/// Sparse noise applied after the initial condition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub p_noise: f64,
    pub p_live: f64,
}

fn default_record_initial() -> bool {
    true
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Rows (ignored for image initial conditions)
    pub height: usize,

    /// Columns (ignored for image initial conditions)
    pub width: usize,

    /// Seed for the engine's RNG; `None` seeds from OS entropy
    #[serde(default)]
    pub rng_seed: Option<i64>,

    #[serde(default)]
    pub initial_condition: InitialCondition,

    #[serde(default)]
    pub noise: Option<NoiseConfig>,

    /// Record the generation-0 population before any advance
    #[serde(default = "default_record_initial")]
    pub record_initial: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            height: 20,
            width: 30,
            rng_seed: None,
            initial_condition: InitialCondition::Empty,
            noise: None,
            record_initial: true,
        }
    }
}

impl SimulationConfig {
    /// Parse from a JSON string
    ///
    /// # Errors
    ///
    /// `Configuration` if the JSON does not describe a config.
    pub fn from_json_str(json: &str) -> SimulationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| SimulationError::Configuration(format!("invalid config: {}", e)))
    }

    /// Read and parse a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> SimulationResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            SimulationError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    /// Check every value before anything is built
    pub fn validate(&self) -> SimulationResult<()> {
        let image_initialized = matches!(self.initial_condition, InitialCondition::Image { .. });
        if !image_initialized && (self.height == 0 || self.width == 0) {
            return Err(SimulationError::InvalidDimensions(format!(
                "height and width must be positive, got {}x{}",
                self.height, self.width
            )));
        }

        if let Some(seed) = self.rng_seed {
            if seed < 0 {
                return Err(SimulationError::Configuration(format!(
                    "seed must be within [0, {}], got {}",
                    i64::MAX,
                    seed
                )));
            }
        }

        if let InitialCondition::Random { p_live } = self.initial_condition {
            check_probability("p_live", p_live)?;
        }

        if let Some(noise) = &self.noise {
            check_probability("p_noise", noise.p_noise)?;
            check_probability("p_live", noise.p_live)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_config_ignores_dimensions() {
        let config = SimulationConfig {
            height: 0,
            width: 0,
            initial_condition: InitialCondition::Image {
                path: PathBuf::from("name.png"),
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_seed_rejected() {
        let config = SimulationConfig {
            rng_seed: Some(-3),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::Configuration(_))
        ));
    }

    #[test]
    fn test_bad_json_is_configuration_error() {
        let err = SimulationConfig::from_json_str("{ \"height\": \"tall\" }").unwrap_err();
        assert!(matches!(err, SimulationError::Configuration(_)));
    }
}
