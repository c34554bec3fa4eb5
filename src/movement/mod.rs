//! Movement domain: raycast-driven platformer character controller.
//!
//! A [`PlatformerActor`] composes a [`GroundedBody`] with the jump, wall-jump,
//! dash and locomotion state machine. Both are engine-agnostic: they talk to
//! the world through [`KinematicBody`], [`RaycastWorld`] and
//! [`CollisionMasks`]. The systems here adapt those seams to avian and run
//! every actor once per fixed step.

mod actions;
mod actor;
mod body;
mod bootstrap;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod kinematic;
mod locomotion;
mod phases;
mod resources;
mod systems;
#[cfg(test)]
mod testing;

pub use actor::PlatformerActor;
pub use body::{GroundTransition, GroundedBody};
pub use components::{GameLayer, Ground, OneWayPlatform, Player, PlayerHitbox, Wall};
pub use controller::drive_actor;
pub use events::{LandedEvent, LeftGroundEvent};
pub use kinematic::{
    CollisionMasks, GameLayers, InputSnapshot, KinematicBody, RayHit, RaycastWorld, TickContext,
    horizontal_dir, slope_tangent,
};
pub use phases::{DashPhase, HaltPhase};
pub use resources::{ActorTuning, BodyGeometry, BodyTuning, MovementInput};
pub use systems::OneWayPlatformHooks;

use bevy::prelude::*;

use crate::movement::bootstrap::bootstrap_player_from_config;
use crate::movement::systems::{read_input, sync_player_hitbox, tick_actors};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<LandedEvent>()
            .add_message::<LeftGroundEvent>()
            .add_systems(Startup, bootstrap_player_from_config)
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, (tick_actors, sync_player_hitbox).chain());

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, (dev::spawn_test_room, dev::spawn_camera));
    }
}
