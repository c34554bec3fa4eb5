//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub use collisions::OneWayPlatformHooks;
pub(crate) use input::read_input;
pub(crate) use movement::{sync_player_hitbox, tick_actors};
