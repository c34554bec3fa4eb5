//! Content domain: tests for config loading and validation.

use std::path::{Path, PathBuf};

use super::*;
use crate::movement::{ActorTuning, BodyGeometry, BodyTuning, PlatformerActor};

fn shipped_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/platformer.ron")
}

// -----------------------------------------------------------------------------
// Loader tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_grounds_on_one_way_ledges() {
    let config = load_config(&shipped_config_path()).expect("shipped config should parse");

    assert!(validate_config(&config).is_empty());
    // The demo ledge is solid from above, so the shipped file opts in.
    assert_eq!(
        config,
        PlatformerConfig {
            body: BodyTuning {
                grounding_includes_one_way: true,
                ..Default::default()
            },
            ..Default::default()
        }
    );
}

#[test]
fn test_partial_config_falls_back_to_defaults() {
    let config = parse_config(
        "(fixed_hz: 120.0, actor: (max_air_jumps: 2, infinite_air_actions: true))",
        "partial.ron",
    )
    .expect("partial config should parse");

    assert_eq!(config.fixed_hz, 120.0);
    assert_eq!(config.actor.max_air_jumps, 2);
    assert!(config.actor.infinite_air_actions);
    assert_eq!(config.actor.jump_speed, ActorTuning::default().jump_speed);
    assert_eq!(config.geometry, BodyGeometry::default());
    assert_eq!(config.body, BodyTuning::default());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_config("(fixed_hz: ", "broken.ron").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_config(Path::new("does/not/exist.ron")).unwrap_err();

    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_load_or_default_rejects_invalid_values() {
    let path = std::env::temp_dir().join(format!(
        "platformer-kcc-invalid-{}.ron",
        std::process::id()
    ));
    std::fs::write(&path, "(fixed_hz: 0.0, actor: (jump_speed: 12.0))").unwrap();

    let config = load_or_default(&path);
    std::fs::remove_file(&path).ok();

    assert_eq!(config, PlatformerConfig::default());
}

#[test]
fn test_load_or_default_without_file_uses_defaults() {
    let config = load_or_default(Path::new("does/not/exist.ron"));
    assert_eq!(config, PlatformerConfig::default());
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&PlatformerConfig::default()).is_empty());
}

#[test]
fn test_negative_ray_length_names_field() {
    let geometry = BodyGeometry {
        ground_ray_length: -0.5,
        ..Default::default()
    };

    let errors = validate_geometry(&geometry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ground_ray_length");
    assert!(errors[0].to_string().contains("ground_ray_length"));
}

#[test]
fn test_zero_fixed_rate_rejected() {
    let config = PlatformerConfig {
        fixed_hz: 0.0,
        ..Default::default()
    };

    let errors = validate_config(&config);
    assert!(errors.iter().any(|e| e.field == "fixed_hz"));
}

#[test]
fn test_grounding_fan_must_fit_inside_body() {
    let geometry = BodyGeometry {
        grounding_half_width: 0.6,
        ..Default::default()
    };

    let errors = validate_geometry(&geometry);
    assert!(errors.iter().any(|e| e.field == "grounding_half_width"));
}

#[test]
fn test_crouch_must_keep_a_wall_ray() {
    let geometry = BodyGeometry {
        crouch_skipped_rays: 5,
        ..Default::default()
    };

    let errors = validate_geometry(&geometry);
    assert!(errors.iter().any(|e| e.field == "crouch_skipped_rays"));
}

#[test]
fn test_decay_must_be_a_fraction() {
    for decay in [0.0, 1.0, 1.5] {
        let tuning = BodyTuning {
            horizontal_decay: decay,
            ..Default::default()
        };
        let errors = validate_body_tuning(&tuning);
        assert!(errors.iter().any(|e| e.field == "horizontal_decay"));
    }
}

#[test]
fn test_nan_values_are_rejected() {
    let tuning = ActorTuning {
        dash_speed: f32::NAN,
        ..Default::default()
    };

    let errors = validate_actor_tuning(&tuning);
    assert!(errors.iter().any(|e| e.field == "dash_speed"));
}

#[test]
fn test_actor_from_config_reports_every_section() {
    let mut config = PlatformerConfig::default();
    config.geometry.half_width = 0.0;
    config.actor.jump_speed = -1.0;

    let errors = PlatformerActor::from_config(&config).unwrap_err();
    assert!(errors.iter().any(|e| e.field == "half_width"));
    assert!(errors.iter().any(|e| e.field == "jump_speed"));
}

#[test]
fn test_actor_from_default_config_builds() {
    let actor = PlatformerActor::from_config(&PlatformerConfig::default()).unwrap();
    assert_eq!(actor.tuning(), &ActorTuning::default());
}
