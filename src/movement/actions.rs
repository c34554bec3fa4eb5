//! Movement domain: jumps, wall jumps, dashes and the air halt.

use bevy::prelude::*;

use crate::movement::{DashPhase, HaltPhase, KinematicBody, PlatformerActor, TickContext};

impl PlatformerActor {
    /// Jump now if grounded or within coyote time, otherwise buffer the request.
    pub fn attempt_jump(&mut self, body: &mut dyn KinematicBody, horizontal_hint: f32) {
        let grounded = self.body.is_grounded();
        if grounded || self.body.time_since_last_grounded() < self.tuning.input_leniency {
            debug!("Ground jump: grounded={}", grounded);
            self.perform_grounded_jump(body, horizontal_hint);
        } else {
            // Slightly too early: honor it on landing or resolve it when the window closes.
            self.jump_buffer = self.tuning.input_leniency;
            self.buffered_hint = horizontal_hint;
        }
    }

    fn perform_grounded_jump(&mut self, body: &mut dyn KinematicBody, horizontal_hint: f32) {
        self.jump_buffer = 0.0;
        self.apply_jump_velocity(body, horizontal_hint);
    }

    fn apply_jump_velocity(&self, body: &mut dyn KinematicBody, horizontal_hint: f32) {
        let mut velocity = body.velocity();
        velocity.y = self.tuning.jump_speed;
        if horizontal_hint != 0.0 {
            let cap = self.tuning.max_jump_horizontal_speed;
            velocity.x = (velocity.x + horizontal_hint.signum() * self.tuning.jump_horizontal_boost)
                .clamp(-cap, cap);
        }
        body.set_velocity(velocity);
    }

    pub(crate) fn drain_jump_buffer(&mut self, body: &mut dyn KinematicBody, ctx: &TickContext) {
        if self.jump_buffer <= 0.0 {
            return;
        }

        if self.body.is_grounded() {
            debug!("Buffered jump fired on landing");
            self.perform_grounded_jump(body, self.buffered_hint);
            return;
        }

        self.jump_buffer -= ctx.dt;
        if self.jump_buffer <= 0.0 {
            self.jump_buffer = 0.0;
            self.resolve_deferred_jump(body, ctx);
        }
    }

    /// The window closed in the air: wall jump if we can, else spend an air jump.
    fn resolve_deferred_jump(&mut self, body: &mut dyn KinematicBody, ctx: &TickContext) {
        let position = body.position();
        if self.body.touching_wall(position, -1.0, ctx) {
            self.wall_jump(body, 1.0);
        } else if self.body.touching_wall(position, 1.0, ctx) {
            self.wall_jump(body, -1.0);
        } else {
            self.attempt_air_jump(body, self.buffered_hint);
        }
    }

    /// Spend one air jump. A no-op when the budget is empty.
    pub fn attempt_air_jump(&mut self, body: &mut dyn KinematicBody, horizontal_hint: f32) -> bool {
        if !self.tuning.infinite_air_actions {
            if self.num_air_jumps == 0 {
                return false;
            }
            self.num_air_jumps -= 1;
        }

        self.clear_wall_jump();
        self.jump_buffer = 0.0;
        self.apply_jump_velocity(body, horizontal_hint);
        debug!("Air jump: air_jumps_remaining={}", self.num_air_jumps);
        true
    }

    /// Launch away from a wall; `launch_direction` points away from it.
    pub fn wall_jump(&mut self, body: &mut dyn KinematicBody, launch_direction: f32) -> bool {
        if launch_direction == 0.0 {
            return false;
        }

        let jump_speed = self.tuning.jump_speed;
        body.set_velocity(Vec2::new(
            jump_speed * launch_direction.signum(),
            jump_speed,
        ));
        self.jump_buffer = 0.0;
        self.is_wall_jumping = true;
        self.wall_jump_lerp_time = 0.0;
        debug!("Wall jump: direction={}", launch_direction.signum());
        true
    }

    pub fn attempt_dash(&mut self, body: &mut dyn KinematicBody, direction: Vec2) -> bool {
        if self.is_dashing() {
            return false;
        }
        let Some(direction) = direction.try_normalize() else {
            return false;
        };

        if !self.tuning.infinite_air_actions {
            if self.num_air_dashes == 0 {
                return false;
            }
            self.num_air_dashes -= 1;
        }

        // The dash owns gravity from here; a pending halt must not re-enable it.
        self.halt = HaltPhase::Idle;
        self.dash = DashPhase::Active { elapsed: 0.0 };
        self.input_locked = true;
        self.drag = self.tuning.dash_drag_start;
        body.set_velocity(direction * self.tuning.dash_speed);
        self.body.disable_gravity(body);
        debug!(
            "Dash: direction={:?}, air_dashes_remaining={}",
            direction, self.num_air_dashes
        );
        true
    }

    pub(crate) fn advance_dash(&mut self, body: &mut dyn KinematicBody, dt: f32) {
        let DashPhase::Active { elapsed } = self.dash else {
            return;
        };

        let elapsed = elapsed + dt;
        let duration = self.tuning.dash_duration;
        if elapsed >= duration {
            self.end_dash(body);
            return;
        }

        let t = elapsed / duration;
        self.drag =
            self.tuning.dash_drag_start + (self.tuning.dash_drag_end - self.tuning.dash_drag_start) * t;
        body.set_velocity(body.velocity() * (1.0 - self.drag * dt).max(0.0));
        self.dash = DashPhase::Active { elapsed };
    }

    fn end_dash(&mut self, body: &mut dyn KinematicBody) {
        self.dash = DashPhase::Idle;
        self.input_locked = false;
        self.drag = self.tuning.baseline_drag;
        self.body.enable_gravity(body);
        debug!("Dash ended");
    }

    /// Cut an active dash short, restoring input, drag and gravity.
    pub fn interrupt_dash(&mut self, body: &mut dyn KinematicBody) -> bool {
        if !self.is_dashing() {
            return false;
        }
        self.end_dash(body);
        true
    }

    /// Hang in the air for `air_halt_duration` with gravity off.
    pub fn halt_in_air(&mut self, body: &mut dyn KinematicBody) -> bool {
        if self.body.is_grounded() || self.is_dashing() || self.is_halted() {
            return false;
        }

        self.halt = HaltPhase::Suspended {
            remaining: self.tuning.air_halt_duration,
        };
        body.set_velocity(Vec2::ZERO);
        self.body.disable_gravity(body);
        debug!("Air halt for {}s", self.tuning.air_halt_duration);
        true
    }

    pub(crate) fn advance_halt(&mut self, body: &mut dyn KinematicBody, dt: f32) {
        let HaltPhase::Suspended { remaining } = self.halt else {
            return;
        };

        // Touching down ends the suspension early.
        if self.body.is_grounded() {
            self.end_halt(body);
            return;
        }

        let remaining = remaining - dt;
        if remaining <= 0.0 {
            self.end_halt(body);
        } else {
            self.halt = HaltPhase::Suspended { remaining };
        }
    }

    fn end_halt(&mut self, body: &mut dyn KinematicBody) {
        self.halt = HaltPhase::Idle;
        self.body.enable_gravity(body);
        debug!("Air halt ended");
    }
}
