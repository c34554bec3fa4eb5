//! Movement domain: the fixed-rate actor tick.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::systems::collisions::{AvianBody, AvianRaycaster};
use crate::movement::{
    GameLayers, GroundTransition, LandedEvent, LeftGroundEvent, MovementInput, PlatformerActor,
    Player, PlayerHitbox, TickContext, drive_actor,
};

/// Frame pass, input attempts, then physics pass, once per fixed step.
pub(crate) fn tick_actors(
    time: Res<Time>,
    gravity: Res<Gravity>,
    spatial_query: SpatialQuery,
    mut input: ResMut<MovementInput>,
    mut landed_events: MessageWriter<LandedEvent>,
    mut left_ground_events: MessageWriter<LeftGroundEvent>,
    mut query: Query<
        (
            Entity,
            &mut PlatformerActor,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
) {
    let snapshot = input.take_snapshot();
    let raycaster = AvianRaycaster::new(&spatial_query);
    let masks = GameLayers;
    let ctx = match TickContext::new(time.delta_secs(), gravity.0, &raycaster, &masks) {
        Ok(ctx) => ctx,
        Err(e) => {
            debug!("Skipping actor tick: {}", e);
            return;
        }
    };

    for (entity, mut actor, mut transform, mut velocity, mut gravity_scale) in &mut query {
        let mut body = AvianBody::new(&mut transform, &mut velocity, &mut gravity_scale);

        match actor.frame_tick(&mut body, &ctx) {
            Some(GroundTransition::Landed) => {
                landed_events.write(LandedEvent { entity });
            }
            Some(GroundTransition::LeftGround) => {
                left_ground_events.write(LeftGroundEvent { entity });
            }
            None => {}
        }

        drive_actor(&mut actor, &mut body, &snapshot, &ctx);
        actor.physics_tick(&mut body, &ctx);
    }
}

/// Swap the player's collider between standing and crouched shapes.
pub(crate) fn sync_player_hitbox(
    players: Query<(&PlatformerActor, &Children), With<Player>>,
    mut hitboxes: Query<(&mut PlayerHitbox, &mut Collider, &mut Transform, &mut Sprite)>,
) {
    for (actor, children) in &players {
        let crouched = actor.is_crouching();
        for child in children.iter() {
            let Ok((mut hitbox, mut collider, mut transform, mut sprite)) = hitboxes.get_mut(child)
            else {
                continue;
            };
            let Some((size, offset)) = hitbox.retarget(actor.body().geometry(), crouched) else {
                continue;
            };

            *collider = Collider::rectangle(size.x, size.y);
            transform.translation.y = offset;
            sprite.custom_size = Some(size);
            debug!("Player hitbox: crouched={}", crouched);
        }
    }
}
