//! Movement domain: body geometry, tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::InputSnapshot;

/// Collision geometry of one actor type. Fixed per actor, never mutated at runtime.
///
/// Offsets assume a 1x2 tile hitbox with the origin in the centre of the lower tile.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct BodyGeometry {
    /// Length of the downward grounding rays, measured from the origin.
    pub ground_ray_length: f32,
    /// Distance from the origin to one side of the collision box.
    pub half_width: f32,
    /// Slightly inset half-width used by ground, slope and ceiling rays.
    pub grounding_half_width: f32,
    /// Distance from the origin down to the bottom of the collision box.
    pub bottom_offset: f32,
    /// Grounding fan, as fractions of `grounding_half_width`.
    pub grounding_ray_fractions: Vec<f32>,
    /// Heights of the wall-clamp rays, bottom to top.
    pub movement_ray_offsets: Vec<f32>,
    /// Number of uppermost wall-clamp rays dropped while crouching.
    pub crouch_skipped_rays: usize,
    /// Heights of the wall-touch rays.
    pub wall_check_offsets: Vec<f32>,
    pub wall_check_length: f32,
    /// Length of the leading downward ray used for slope descent.
    pub slope_check_length: f32,
    pub uncrouch_clearance: f32,
}

impl Default for BodyGeometry {
    fn default() -> Self {
        Self {
            ground_ray_length: 0.55,
            half_width: 0.5,
            grounding_half_width: 0.425,
            bottom_offset: 0.5,
            grounding_ray_fractions: vec![-1.0, -0.5, 0.0, 0.5, 1.0],
            movement_ray_offsets: vec![-0.45, -0.15, 0.2, 0.5, 0.8],
            crouch_skipped_rays: 2,
            wall_check_offsets: vec![-0.4, -0.2, 0.0, 0.2, 0.4],
            wall_check_length: 0.55,
            slope_check_length: 1.0,
            uncrouch_clearance: 0.9,
        }
    }
}

/// Gravity shaping and damping applied by the grounded body.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct BodyTuning {
    /// Extra gravity applied near the apex and while falling, as a multiple of gravity.
    pub gravity_multiplier: f32,
    /// Vertical speed below which extra gravity kicks in.
    pub gravity_rise_threshold: f32,
    pub max_fall_speed: f32,
    /// Per-tick horizontal velocity factor, in `(0, 1)`.
    pub horizontal_decay: f32,
    /// Horizontal speeds smaller than this settle to zero.
    pub horizontal_rest_epsilon: f32,
    /// Landing only snaps when vertical velocity is at or below this.
    pub landing_velocity_threshold: f32,
    /// Whether one-way platforms count as ground for the grounding fan.
    pub grounding_includes_one_way: bool,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            gravity_multiplier: 2.0,
            gravity_rise_threshold: 5.0,
            max_fall_speed: 20.0,
            horizontal_decay: 0.9,
            horizontal_rest_epsilon: 0.001,
            landing_velocity_threshold: 0.1,
            grounding_includes_one_way: false,
        }
    }
}

/// Action tuning for the platformer actor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ActorTuning {
    pub ground_speed: f32,
    pub air_speed: f32,
    pub jump_speed: f32,
    /// Horizontal speed added by a jump in the direction of held input.
    pub jump_horizontal_boost: f32,
    pub max_jump_horizontal_speed: f32,
    /// Coyote time and jump buffer window, in seconds.
    pub input_leniency: f32,
    pub max_air_jumps: u32,
    pub max_air_dashes: u32,
    pub infinite_air_actions: bool,
    pub wall_jump_lerp_duration: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_drag_start: f32,
    pub dash_drag_end: f32,
    pub baseline_drag: f32,
    /// Surfaces whose normal has a larger vertical component are walkable slopes.
    pub slope_normal_threshold: f32,
    pub air_halt_duration: f32,
    /// Downward stick deflection that counts as a crouch request.
    pub crouch_axis_threshold: f32,
}

impl Default for ActorTuning {
    fn default() -> Self {
        Self {
            ground_speed: 4.0,
            air_speed: 3.2,
            jump_speed: 9.0,
            jump_horizontal_boost: 2.0,
            max_jump_horizontal_speed: 4.0,
            input_leniency: 0.05,
            max_air_jumps: 1,
            max_air_dashes: 1,
            infinite_air_actions: false,
            wall_jump_lerp_duration: 0.3,
            dash_speed: 14.0,
            dash_duration: 0.2,
            dash_drag_start: 1.0,
            dash_drag_end: 8.0,
            baseline_drag: 0.0,
            slope_normal_threshold: 0.1,
            air_halt_duration: 0.25,
            crouch_axis_threshold: 0.5,
        }
    }
}

/// Keyboard state latched between fixed ticks.
///
/// Edges stay set until a fixed tick takes them, so a press landing between
/// two ticks is never lost.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub dpad: Vec2,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
    pub halt_just_pressed: bool,
}

impl MovementInput {
    /// Copy the current state and clear the latched edges.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            axis: self.axis,
            jump_pressed: self.jump_just_pressed,
            dash_pressed: self.dash_just_pressed,
            dash_direction: self.dpad,
            halt_pressed: self.halt_just_pressed,
        };
        self.jump_just_pressed = false;
        self.dash_just_pressed = false;
        self.halt_just_pressed = false;
        snapshot
    }
}
