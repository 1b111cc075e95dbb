//! Configuration tests
//!
//! Engines built from config follow a fixed order: validate, seed, initial
//! condition, noise, record. The draw sequence depends on it.

use std::io::Write;
use std::path::PathBuf;

use life_simulator_core_rs::{
    Engine, InitialCondition, NoiseConfig, SimulationConfig, SimulationError,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn random_config(seed: i64) -> SimulationConfig {
    SimulationConfig {
        height: 5,
        width: 10,
        rng_seed: Some(seed),
        initial_condition: InitialCondition::Random { p_live: 0.5 },
        noise: None,
        record_initial: true,
    }
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_minimal_json_uses_defaults() {
    let config = SimulationConfig::from_json_str(r#"{ "height": 4, "width": 6 }"#).unwrap();

    assert_eq!(config.rng_seed, None);
    assert_eq!(config.initial_condition, InitialCondition::Empty);
    assert_eq!(config.noise, None);
    assert!(config.record_initial);
}

#[test]
fn test_full_json() {
    let config = SimulationConfig::from_json_str(
        r#"{
            "height": 8,
            "width": 9,
            "rng_seed": 99,
            "initial_condition": { "type": "random", "p_live": 0.25 },
            "noise": { "p_noise": 0.1, "p_live": 0.5 },
            "record_initial": false
        }"#,
    )
    .unwrap();

    assert_eq!(config.rng_seed, Some(99));
    assert_eq!(
        config.noise,
        Some(NoiseConfig {
            p_noise: 0.1,
            p_live: 0.5
        })
    );
    assert!(!config.record_initial);
}

#[test]
fn test_image_condition_json() {
    let config = SimulationConfig::from_json_str(
        r#"{ "height": 0, "width": 0,
             "initial_condition": { "type": "image", "path": "input_images/glider.png" } }"#,
    )
    .unwrap();

    assert_eq!(
        config.initial_condition,
        InitialCondition::Image {
            path: PathBuf::from("input_images/glider.png")
        }
    );
}

#[test]
fn test_unknown_condition_type_rejected() {
    let err = SimulationConfig::from_json_str(
        r#"{ "height": 4, "width": 4, "initial_condition": { "type": "spiral" } }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SimulationError::Configuration(_)));
}

#[test]
fn test_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "height": 3, "width": 7, "rng_seed": 5 }}"#).unwrap();

    let config = SimulationConfig::from_json_file(file.path()).unwrap();
    assert_eq!((config.height, config.width), (3, 7));
}

#[test]
fn test_missing_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimulationConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SimulationError::Configuration(_)));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validation_failures() {
    let zero = SimulationConfig {
        height: 0,
        ..random_config(1)
    };
    assert!(matches!(
        zero.validate(),
        Err(SimulationError::InvalidDimensions(_))
    ));

    let bad_p = SimulationConfig {
        initial_condition: InitialCondition::Random { p_live: 1.2 },
        ..random_config(1)
    };
    assert!(matches!(
        bad_p.validate(),
        Err(SimulationError::InvalidParameter { .. })
    ));

    let bad_noise = SimulationConfig {
        noise: Some(NoiseConfig {
            p_noise: -0.1,
            p_live: 0.5,
        }),
        ..random_config(1)
    };
    assert!(bad_noise.validate().is_err());

    assert!(matches!(
        Engine::from_config(&random_config(-5)),
        Err(SimulationError::Configuration(_))
    ));
}

// ============================================================================
// Building engines
// ============================================================================

#[test]
fn test_from_config_matches_manual_setup() {
    let from_config = Engine::from_config(&random_config(1)).unwrap();

    let mut manual = Engine::with_seed(5, 10, 1).unwrap();
    manual.randomize(0.5).unwrap();
    manual.record_count();

    assert_eq!(from_config.grid(), manual.grid());
    assert_eq!(from_config.population_history().as_slice(), &[26]);
    assert_eq!(from_config.seed(), Some(1));
}

#[test]
fn test_noise_applied_after_initial_condition() {
    let config = SimulationConfig {
        noise: Some(NoiseConfig {
            p_noise: 0.3,
            p_live: 0.9,
        }),
        ..random_config(8)
    };
    let from_config = Engine::from_config(&config).unwrap();

    let mut manual = Engine::with_seed(5, 10, 8).unwrap();
    manual.randomize(0.5).unwrap();
    manual.add_noise(0.3, 0.9).unwrap();

    assert_eq!(from_config.grid(), manual.grid());
}

#[test]
fn test_record_initial_off() {
    let config = SimulationConfig {
        record_initial: false,
        ..random_config(2)
    };
    let engine = Engine::from_config(&config).unwrap();
    assert!(engine.population_history().is_empty());
}

#[test]
fn test_empty_condition() {
    let config = SimulationConfig {
        initial_condition: InitialCondition::Empty,
        ..random_config(2)
    };
    let engine = Engine::from_config(&config).unwrap();
    assert_eq!(engine.alive_count(), 0);
    assert_eq!(engine.population_history().as_slice(), &[0]);
}
