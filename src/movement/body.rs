//! Movement domain: grounding, gravity shaping and wall contact.

use bevy::prelude::*;

use crate::content::{ConfigError, validate_body_tuning, validate_geometry};
use crate::movement::{BodyGeometry, BodyTuning, KinematicBody, TickContext, horizontal_dir};

/// Grounding edge reported by [`GroundedBody::update_grounded_state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
}

/// Per-actor grounding state layered over a [`KinematicBody`].
#[derive(Debug, Clone)]
pub struct GroundedBody {
    geometry: BodyGeometry,
    tuning: BodyTuning,
    grounded_this_frame: bool,
    grounded_last_frame: bool,
    time_since_last_grounded: f32,
    distance_to_ground: f32,
    gravity_halted: bool,
}

impl GroundedBody {
    pub fn new(geometry: BodyGeometry, tuning: BodyTuning) -> Result<Self, Vec<ConfigError>> {
        let mut errors = validate_geometry(&geometry);
        errors.extend(validate_body_tuning(&tuning));
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            geometry,
            tuning,
            grounded_this_frame: false,
            grounded_last_frame: false,
            // Never grounded yet, so no coyote window.
            time_since_last_grounded: f32::INFINITY,
            distance_to_ground: 0.0,
            gravity_halted: false,
        })
    }

    pub fn geometry(&self) -> &BodyGeometry {
        &self.geometry
    }

    pub fn tuning(&self) -> &BodyTuning {
        &self.tuning
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded_this_frame
    }

    pub fn was_grounded_last_frame(&self) -> bool {
        self.grounded_last_frame
    }

    pub fn time_since_last_grounded(&self) -> f32 {
        self.time_since_last_grounded
    }

    /// Only meaningful in the tick it was computed.
    pub fn distance_to_ground(&self) -> f32 {
        self.distance_to_ground
    }

    pub fn is_gravity_halted(&self) -> bool {
        self.gravity_halted
    }

    /// Recompute grounding for this tick and react to the edge, if any.
    pub fn update_grounded_state(
        &mut self,
        body: &mut dyn KinematicBody,
        ctx: &TickContext,
    ) -> Option<GroundTransition> {
        self.grounded_last_frame = self.grounded_this_frame;
        let (grounded, distance) = self.check_grounded(body.position(), ctx);
        self.grounded_this_frame = grounded;
        self.distance_to_ground = distance;

        if grounded {
            self.time_since_last_grounded = 0.0;
        } else {
            self.time_since_last_grounded += ctx.dt;
        }

        match (self.grounded_last_frame, self.grounded_this_frame) {
            (false, true) => {
                self.land(body);
                Some(GroundTransition::Landed)
            }
            (true, false) => {
                if !self.gravity_halted {
                    body.set_gravity_enabled(true);
                }
                Some(GroundTransition::LeftGround)
            }
            _ => None,
        }
    }

    /// Snap onto the floor unless we are still rising through it.
    fn land(&mut self, body: &mut dyn KinematicBody) {
        if body.velocity().y > self.tuning.landing_velocity_threshold {
            return;
        }

        let mut position = body.position();
        position.y -= self.distance_to_ground;
        body.set_position(position);
        body.set_velocity(Vec2::ZERO);
        // Stay off until we leave the ground so we don't sink before the next snap.
        body.set_gravity_enabled(false);
    }

    /// Cast the grounding fan. Returns `(grounded, distance_to_ground)`.
    pub fn check_grounded(&self, position: Vec2, ctx: &TickContext) -> (bool, f32) {
        let mask = ctx
            .masks
            .ground_mask(self.tuning.grounding_includes_one_way);
        let nearest = self
            .geometry
            .grounding_ray_fractions
            .iter()
            .filter_map(|fraction| {
                let origin =
                    position + Vec2::X * (fraction * self.geometry.grounding_half_width);
                ctx.world
                    .cast(origin, Dir2::NEG_Y, self.geometry.ground_ray_length, mask)
            })
            .map(|hit| hit.distance)
            .reduce(f32::min);

        match nearest {
            Some(distance) => (true, (distance - self.geometry.bottom_offset).max(0.0)),
            None => (false, 0.0),
        }
    }

    /// Snappier falls: extra gravity near the apex and on the way down.
    pub fn apply_gravity(&self, body: &mut dyn KinematicBody, ctx: &TickContext) {
        if self.grounded_this_frame || self.gravity_halted {
            return;
        }

        let mut velocity = body.velocity();
        if velocity.y < self.tuning.gravity_rise_threshold {
            velocity += ctx.gravity * self.tuning.gravity_multiplier * ctx.dt;
            body.set_velocity(velocity);
        }
    }

    pub fn limit_fall_speed(&self, body: &mut dyn KinematicBody) {
        let mut velocity = body.velocity();
        if velocity.y < -self.tuning.max_fall_speed {
            velocity.y = -self.tuning.max_fall_speed;
            body.set_velocity(velocity);
        }
    }

    pub fn decay_horizontal(&self, body: &mut dyn KinematicBody) {
        let mut velocity = body.velocity();
        if velocity.x == 0.0 {
            return;
        }

        velocity.x *= self.tuning.horizontal_decay;
        if velocity.x.abs() < self.tuning.horizontal_rest_epsilon {
            velocity.x = 0.0;
        }
        body.set_velocity(velocity);
    }

    /// Whether a wall is within reach on the `direction` side (`-1` or `+1`).
    pub fn touching_wall(&self, position: Vec2, direction: f32, ctx: &TickContext) -> bool {
        let Some(ray_dir) = horizontal_dir(direction) else {
            return false;
        };

        // One-way platforms are never walls.
        let mask = ctx.masks.ground_mask(false);
        self.geometry.wall_check_offsets.iter().any(|offset| {
            ctx.world
                .cast(
                    position + Vec2::Y * *offset,
                    ray_dir,
                    self.geometry.wall_check_length,
                    mask,
                )
                .is_some()
        })
    }

    /// Take exclusive control of vertical motion.
    pub fn disable_gravity(&mut self, body: &mut dyn KinematicBody) {
        self.gravity_halted = true;
        body.set_gravity_enabled(false);
    }

    pub fn enable_gravity(&mut self, body: &mut dyn KinematicBody) {
        self.gravity_halted = false;
        body.set_gravity_enabled(true);
    }
}
