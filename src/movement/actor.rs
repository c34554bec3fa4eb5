//! Movement domain: the platformer actor and its per-tick entry points.
//!
//! `PlatformerActor` owns a [`GroundedBody`] and layers the action state
//! machine on top of it. Locomotion lives in `locomotion.rs`; jumps, dashes
//! and the air halt live in `actions.rs`.

use bevy::prelude::*;

use crate::content::{ConfigError, PlatformerConfig, validate_actor_tuning};
use crate::movement::{
    ActorTuning, BodyGeometry, BodyTuning, DashPhase, GroundTransition, GroundedBody, HaltPhase,
    KinematicBody, TickContext,
};

#[derive(Component, Debug, Clone)]
pub struct PlatformerActor {
    pub(crate) body: GroundedBody,
    pub(crate) tuning: ActorTuning,
    pub(crate) num_air_jumps: u32,
    pub(crate) num_air_dashes: u32,
    pub(crate) jump_buffer: f32,
    /// Horizontal input captured when the buffered jump was requested.
    pub(crate) buffered_hint: f32,
    pub(crate) dash: DashPhase,
    pub(crate) halt: HaltPhase,
    pub(crate) is_wall_jumping: bool,
    pub(crate) wall_jump_lerp_time: f32,
    pub(crate) is_crouching: bool,
    pub(crate) input_locked: bool,
    pub(crate) drag: f32,
}

impl PlatformerActor {
    pub fn new(
        geometry: BodyGeometry,
        body_tuning: BodyTuning,
        tuning: ActorTuning,
    ) -> Result<Self, Vec<ConfigError>> {
        let actor_errors = validate_actor_tuning(&tuning);
        let body = match GroundedBody::new(geometry, body_tuning) {
            Ok(body) if actor_errors.is_empty() => body,
            Ok(_) => return Err(actor_errors),
            Err(mut errors) => {
                errors.extend(actor_errors);
                return Err(errors);
            }
        };

        Ok(Self {
            body,
            num_air_jumps: tuning.max_air_jumps,
            num_air_dashes: tuning.max_air_dashes,
            jump_buffer: 0.0,
            buffered_hint: 0.0,
            dash: DashPhase::Idle,
            halt: HaltPhase::Idle,
            is_wall_jumping: false,
            wall_jump_lerp_time: 0.0,
            is_crouching: false,
            input_locked: false,
            drag: tuning.baseline_drag,
            tuning,
        })
    }

    pub fn from_config(config: &PlatformerConfig) -> Result<Self, Vec<ConfigError>> {
        Self::new(
            config.geometry.clone(),
            config.body.clone(),
            config.actor.clone(),
        )
    }

    pub fn body(&self) -> &GroundedBody {
        &self.body
    }

    pub fn tuning(&self) -> &ActorTuning {
        &self.tuning
    }

    pub fn is_grounded(&self) -> bool {
        self.body.is_grounded()
    }

    pub fn is_moving(&self, body: &dyn KinematicBody) -> bool {
        body.velocity().x != 0.0
    }

    pub fn inputs_locked(&self) -> bool {
        self.input_locked
    }

    pub fn lock_inputs(&mut self, locked: bool) {
        self.input_locked = locked;
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_active()
    }

    pub fn is_halted(&self) -> bool {
        self.halt.is_active()
    }

    pub fn is_wall_jumping(&self) -> bool {
        self.is_wall_jumping
    }

    pub fn wall_jump_lerp_time(&self) -> f32 {
        self.wall_jump_lerp_time
    }

    pub fn is_crouching(&self) -> bool {
        self.is_crouching
    }

    pub fn num_air_jumps(&self) -> u32 {
        self.num_air_jumps
    }

    pub fn num_air_dashes(&self) -> u32 {
        self.num_air_dashes
    }

    pub fn jump_buffer(&self) -> f32 {
        self.jump_buffer
    }

    pub fn drag(&self) -> f32 {
        self.drag
    }

    /// Frame pass: grounding, edge reactions, wall-jump blend timer, jump buffer.
    ///
    /// Input-driven attempts follow this, see [`crate::movement::drive_actor`].
    pub fn frame_tick(
        &mut self,
        body: &mut dyn KinematicBody,
        ctx: &TickContext,
    ) -> Option<GroundTransition> {
        let transition = self.body.update_grounded_state(body, ctx);
        match transition {
            Some(GroundTransition::Landed) => self.on_landed(),
            Some(GroundTransition::LeftGround) => self.on_left_ground(),
            None => {}
        }

        self.advance_wall_jump_blend(ctx.dt);
        self.drain_jump_buffer(body, ctx);
        transition
    }

    /// Physics pass: gravity shaping, fall clamp, horizontal decay, timed routines.
    pub fn physics_tick(&mut self, body: &mut dyn KinematicBody, ctx: &TickContext) {
        self.body.apply_gravity(body, ctx);
        self.body.limit_fall_speed(body);
        self.body.decay_horizontal(body);
        self.advance_dash(body, ctx.dt);
        self.advance_halt(body, ctx.dt);
    }

    fn on_landed(&mut self) {
        self.num_air_jumps = self.tuning.max_air_jumps;
        self.num_air_dashes = self.tuning.max_air_dashes;
        debug!(
            "Landed: air_jumps={}, air_dashes={}",
            self.num_air_jumps, self.num_air_dashes
        );
    }

    fn on_left_ground(&mut self) {
        debug!(
            "Left ground: air_jumps={}, air_dashes={}",
            self.num_air_jumps, self.num_air_dashes
        );
    }

    fn advance_wall_jump_blend(&mut self, dt: f32) {
        if !self.is_wall_jumping {
            return;
        }

        let duration = self.tuning.wall_jump_lerp_duration;
        self.wall_jump_lerp_time = (self.wall_jump_lerp_time + dt).min(duration);
        if self.wall_jump_lerp_time >= duration {
            self.clear_wall_jump();
        }
    }

    pub(crate) fn clear_wall_jump(&mut self) {
        self.is_wall_jumping = false;
        self.wall_jump_lerp_time = 0.0;
    }
}
