//! Movement domain: horizontal movement with wall clamping, slopes and crouching.

use bevy::prelude::*;

use crate::movement::{
    KinematicBody, PlatformerActor, TickContext, horizontal_dir, slope_tangent,
};

impl PlatformerActor {
    /// Move horizontally by this tick's feasible displacement.
    ///
    /// Returns `false` when nothing moved: dashing, locked input, zero input,
    /// or a wall already flush against us.
    pub fn attempt_movement(
        &mut self,
        body: &mut dyn KinematicBody,
        direction: Vec2,
        ctx: &TickContext,
    ) -> bool {
        if self.is_dashing() || self.input_locked {
            return false;
        }

        let speed = if self.body.is_grounded() {
            self.tuning.ground_speed
        } else {
            self.tuning.air_speed
        };

        let mut movement = self.adjust_horizontal_movement(
            body.position(),
            direction,
            speed,
            self.is_crouching,
            ctx,
        );

        if self.is_wall_jumping {
            // Input regains authority gradually after a wall jump. The slope
            // term scales with x so it stays tan(angle) * |x|.
            let blend = self.wall_jump_lerp_time / self.tuning.wall_jump_lerp_duration;
            movement *= blend.clamp(0.0, 1.0);
        }

        if movement == Vec2::ZERO {
            return false;
        }

        body.set_position(body.position() + movement);
        true
    }

    /// Limit a move so the actor stops flush against walls, and follow slopes.
    pub fn adjust_horizontal_movement(
        &self,
        origin: Vec2,
        direction: Vec2,
        speed: f32,
        reduced_hitbox: bool,
        ctx: &TickContext,
    ) -> Vec2 {
        let Some(ray_dir) = horizontal_dir(direction.x) else {
            return Vec2::ZERO;
        };

        let geometry = self.body.geometry();
        let step = speed * ctx.dt;
        let reach = geometry.half_width + step;
        let mask = ctx.masks.ground_mask(true);

        let skipped = if reduced_hitbox {
            geometry.crouch_skipped_rays
        } else {
            0
        };
        let active = geometry.movement_ray_offsets.len().saturating_sub(skipped);

        let mut nearest: Option<f32> = None;
        let mut ascent_normal = None;
        for (i, offset) in geometry.movement_ray_offsets[..active].iter().enumerate() {
            let Some(hit) = ctx
                .world
                .cast(origin + Vec2::Y * *offset, ray_dir, reach, mask)
            else {
                continue;
            };

            if self.is_walkable(hit.normal) {
                // Only the bottom ray tells us the slope we're about to climb.
                if i == 0 {
                    ascent_normal = Some(hit.normal);
                }
                continue;
            }

            if hit.distance > 0.0 {
                nearest = Some(nearest.map_or(hit.distance, |d| d.min(hit.distance)));
            }
        }

        let distance = match nearest {
            Some(d) => (d - geometry.half_width).clamp(0.0, step),
            None => step,
        };
        let horizontal = direction.x.clamp(-1.0, 1.0) * distance;

        let mut vertical = 0.0;
        if let Some(normal) = ascent_normal {
            vertical += slope_tangent(normal) * horizontal.abs();
        }
        if let Some(normal) = self.descent_normal(origin, direction.x.signum(), ctx) {
            vertical -= slope_tangent(normal) * horizontal.abs();
        }

        Vec2::new(horizontal, vertical)
    }

    /// Normal of a downslope directly ahead, if we're standing on one.
    fn descent_normal(&self, origin: Vec2, sign: f32, ctx: &TickContext) -> Option<Vec2> {
        if !self.body.is_grounded() {
            return None;
        }

        let geometry = self.body.geometry();
        let foot = origin + Vec2::X * (sign * geometry.grounding_half_width);
        let hit = ctx.world.cast(
            foot,
            Dir2::NEG_Y,
            geometry.slope_check_length,
            ctx.masks.ground_mask(true),
        )?;

        let downhill = hit.normal.x != 0.0 && hit.normal.x.signum() == sign;
        (self.is_walkable(hit.normal) && downhill).then_some(hit.normal)
    }

    fn is_walkable(&self, normal: Vec2) -> bool {
        normal.y > self.tuning.slope_normal_threshold
    }

    /// Request a crouch state. Standing back up fails under a low ceiling.
    pub fn set_crouching(
        &mut self,
        crouching: bool,
        body: &dyn KinematicBody,
        ctx: &TickContext,
    ) -> bool {
        if crouching == self.is_crouching {
            return true;
        }
        if !crouching && !self.can_uncrouch(body.position(), ctx) {
            return false;
        }

        self.is_crouching = crouching;
        true
    }

    pub fn can_uncrouch(&self, origin: Vec2, ctx: &TickContext) -> bool {
        let geometry = self.body.geometry();
        let mask = ctx.masks.ground_mask(true);
        let inset = geometry.grounding_half_width;

        ![0.0, -inset, inset].iter().any(|dx| {
            ctx.world
                .cast(
                    origin + Vec2::X * *dx,
                    Dir2::Y,
                    geometry.uncrouch_clearance,
                    mask,
                )
                .is_some()
        })
    }
}
