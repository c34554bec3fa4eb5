//! Movement domain: grounding edge events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted on the tick an actor touches down
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}

/// Emitted on the tick an actor leaves the ground
#[derive(Debug)]
pub struct LeftGroundEvent {
    pub entity: Entity,
}

impl Message for LeftGroundEvent {}
