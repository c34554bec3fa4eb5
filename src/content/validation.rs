//! Validation for platformer configuration.
//!
//! Malformed values are programmer errors: actors refuse to build from them.

use super::data::PlatformerConfig;
use crate::movement::{ActorTuning, BodyGeometry, BodyTuning};

/// A validation error naming the offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub field: &'static str,
    pub message: String,
}

impl ConfigError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Helper macro for rejecting values that are not strictly positive
macro_rules! check_positive {
    ($errors:expr, $owner:expr, $field:ident) => {
        if !($owner.$field > 0.0) || !$owner.$field.is_finite() {
            $errors.push(ConfigError::new(
                stringify!($field),
                format!("must be positive, got {}", $owner.$field),
            ));
        }
    };
}

/// Helper macro for rejecting negative values
macro_rules! check_non_negative {
    ($errors:expr, $owner:expr, $field:ident) => {
        if !($owner.$field >= 0.0) || !$owner.$field.is_finite() {
            $errors.push(ConfigError::new(
                stringify!($field),
                format!("must not be negative, got {}", $owner.$field),
            ));
        }
    };
}

pub fn validate_geometry(geometry: &BodyGeometry) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    check_positive!(errors, geometry, ground_ray_length);
    check_positive!(errors, geometry, half_width);
    check_positive!(errors, geometry, grounding_half_width);
    check_non_negative!(errors, geometry, bottom_offset);
    check_positive!(errors, geometry, wall_check_length);
    check_positive!(errors, geometry, slope_check_length);
    check_positive!(errors, geometry, uncrouch_clearance);

    if geometry.grounding_half_width > geometry.half_width {
        errors.push(ConfigError::new(
            "grounding_half_width",
            format!(
                "must not exceed half_width ({} > {})",
                geometry.grounding_half_width, geometry.half_width
            ),
        ));
    }
    if geometry.grounding_ray_fractions.is_empty() {
        errors.push(ConfigError::new(
            "grounding_ray_fractions",
            "needs at least one ray",
        ));
    }
    if geometry.movement_ray_offsets.is_empty() {
        errors.push(ConfigError::new(
            "movement_ray_offsets",
            "needs at least one ray",
        ));
    }
    if geometry.crouch_skipped_rays >= geometry.movement_ray_offsets.len().max(1) {
        errors.push(ConfigError::new(
            "crouch_skipped_rays",
            "must leave at least one wall ray while crouching",
        ));
    }

    errors
}

pub fn validate_body_tuning(tuning: &BodyTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    check_non_negative!(errors, tuning, gravity_multiplier);
    check_positive!(errors, tuning, max_fall_speed);
    check_non_negative!(errors, tuning, horizontal_rest_epsilon);
    check_non_negative!(errors, tuning, landing_velocity_threshold);

    if !(tuning.horizontal_decay > 0.0 && tuning.horizontal_decay < 1.0) {
        errors.push(ConfigError::new(
            "horizontal_decay",
            format!("must be in (0, 1), got {}", tuning.horizontal_decay),
        ));
    }

    errors
}

pub fn validate_actor_tuning(tuning: &ActorTuning) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    check_non_negative!(errors, tuning, ground_speed);
    check_non_negative!(errors, tuning, air_speed);
    check_positive!(errors, tuning, jump_speed);
    check_non_negative!(errors, tuning, jump_horizontal_boost);
    check_non_negative!(errors, tuning, max_jump_horizontal_speed);
    check_non_negative!(errors, tuning, input_leniency);
    check_positive!(errors, tuning, wall_jump_lerp_duration);
    check_positive!(errors, tuning, dash_speed);
    check_positive!(errors, tuning, dash_duration);
    check_non_negative!(errors, tuning, dash_drag_start);
    check_non_negative!(errors, tuning, dash_drag_end);
    check_non_negative!(errors, tuning, baseline_drag);
    check_non_negative!(errors, tuning, air_halt_duration);
    check_positive!(errors, tuning, crouch_axis_threshold);

    if !(0.0..1.0).contains(&tuning.slope_normal_threshold) {
        errors.push(ConfigError::new(
            "slope_normal_threshold",
            format!("must be in [0, 1), got {}", tuning.slope_normal_threshold),
        ));
    }

    errors
}

/// Validate a whole config document.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_config(config: &PlatformerConfig) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if !(config.fixed_hz > 0.0) || !config.fixed_hz.is_finite() {
        errors.push(ConfigError::new(
            "fixed_hz",
            format!("must be positive, got {}", config.fixed_hz),
        ));
    }

    errors.extend(validate_geometry(&config.geometry));
    errors.extend(validate_body_tuning(&config.body));
    errors.extend(validate_actor_tuning(&config.actor));
    errors
}
