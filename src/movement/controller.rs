//! Movement domain: maps an input snapshot onto actor action attempts.

use crate::movement::{InputSnapshot, KinematicBody, PlatformerActor, TickContext};

/// Feed one tick of input to an actor, after its frame pass.
pub fn drive_actor(
    actor: &mut PlatformerActor,
    body: &mut dyn KinematicBody,
    input: &InputSnapshot,
    ctx: &TickContext,
) {
    let wants_crouch = input.axis.y <= -actor.tuning().crouch_axis_threshold;
    actor.set_crouching(wants_crouch, body, ctx);

    actor.attempt_movement(body, input.axis, ctx);

    if input.jump_pressed {
        actor.attempt_jump(body, input.axis.x);
    }

    if input.dash_pressed {
        actor.attempt_dash(body, input.dash_direction);
    }

    if input.halt_pressed {
        actor.halt_in_air(body);
    }
}
