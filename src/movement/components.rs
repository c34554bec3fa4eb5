//! Movement domain: markers and physics layers for the world and the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::BodyGeometry;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, slopes)
    Ground,
    /// Wall surfaces
    Wall,
    /// Platforms that can be jumped through from below
    OneWayPlatform,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// The player's collider child. Tracks which shape it currently carries.
#[derive(Component, Debug, Default)]
pub struct PlayerHitbox {
    pub crouched: bool,
}

impl PlayerHitbox {
    /// Collider size and vertical offset from the body origin.
    ///
    /// Standing is two tiles tall, crouching one; both keep the bottom edge
    /// `bottom_offset` below the origin.
    pub fn shape(geometry: &BodyGeometry, crouched: bool) -> (Vec2, f32) {
        let tiles = if crouched { 1.0 } else { 2.0 };
        let width = geometry.half_width * 2.0 * 0.9;
        let height = geometry.bottom_offset * 2.0 * tiles;
        (Vec2::new(width, height), height * 0.5 - geometry.bottom_offset)
    }

    /// Record the crouch state, returning the new shape only when it changed.
    pub fn retarget(&mut self, geometry: &BodyGeometry, crouched: bool) -> Option<(Vec2, f32)> {
        if self.crouched == crouched {
            return None;
        }
        self.crouched = crouched;
        Some(Self::shape(geometry, crouched))
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Marker for one-way platform colliders
#[derive(Component, Debug)]
pub struct OneWayPlatform;
