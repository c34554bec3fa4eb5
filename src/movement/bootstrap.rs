//! Movement domain: player bootstrap from the loaded platformer config.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::PlatformerConfig;
use crate::movement::{GameLayer, PlatformerActor, Player, PlayerHitbox};

/// Spawn the player with an actor built from `PlatformerConfig`.
pub(crate) fn bootstrap_player_from_config(
    mut commands: Commands,
    config: Res<PlatformerConfig>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let actor = match PlatformerActor::from_config(&config) {
        Ok(actor) => actor,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            error!("Invalid platformer config, player not spawned");
            return;
        }
    };

    // Origin sits in the centre of the lower tile; the box extends one tile above it.
    let (size, collider_offset) = PlayerHitbox::shape(actor.body().geometry(), false);

    info!(
        "Spawning player: ground_speed={}, jump_speed={}, air_jumps={}, air_dashes={}",
        actor.tuning().ground_speed,
        actor.tuning().jump_speed,
        actor.tuning().max_air_jumps,
        actor.tuning().max_air_dashes
    );

    commands
        .spawn((
            Player,
            actor,
            Transform::from_xyz(0.0, 2.0, 0.0),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerHitbox::default(),
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(size),
                    ..default()
                },
                Transform::from_xyz(0.0, collider_offset, 0.0),
                Collider::rectangle(size.x, size.y),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Wall, GameLayer::OneWayPlatform],
                ),
            ));
        });
}
