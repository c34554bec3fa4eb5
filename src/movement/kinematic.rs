//! Movement domain: engine seams for raycasts, layer masks and body access.
//!
//! The controller never talks to the physics engine directly. It reads and
//! writes through [`KinematicBody`], queries geometry through
//! [`RaycastWorld`], and asks [`CollisionMasks`] which layers block a ray.
//! The avian adapters live in `systems::collisions`; tests use scripted fakes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ConfigError;
use crate::movement::GameLayer;

/// Nearest surface reported by a raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f32,
    pub normal: Vec2,
}

/// Raycast primitive against world geometry.
///
/// Returning `None` is the normal no-hit outcome, not an error.
pub trait RaycastWorld {
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit>;
}

/// Supplies the layers considered "ground/wall" for a ray.
pub trait CollisionMasks {
    fn ground_mask(&self, include_one_way: bool) -> LayerMask;
}

/// Default mask provider over [`GameLayer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GameLayers;

impl CollisionMasks for GameLayers {
    fn ground_mask(&self, include_one_way: bool) -> LayerMask {
        let mut bits = GameLayer::Ground.to_bits() | GameLayer::Wall.to_bits();
        if include_one_way {
            bits |= GameLayer::OneWayPlatform.to_bits();
        }
        LayerMask(bits)
    }
}

/// Position/velocity/gravity access to whatever owns the rigid body.
pub trait KinematicBody {
    fn position(&self) -> Vec2;
    fn set_position(&mut self, position: Vec2);
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Toggle engine-integrated gravity for this body.
    fn set_gravity_enabled(&mut self, enabled: bool);
}

/// Everything a tick needs from the outside world.
pub struct TickContext<'a> {
    pub dt: f32,
    pub gravity: Vec2,
    pub world: &'a dyn RaycastWorld,
    pub masks: &'a dyn CollisionMasks,
}

impl<'a> TickContext<'a> {
    pub fn new(
        dt: f32,
        gravity: Vec2,
        world: &'a dyn RaycastWorld,
        masks: &'a dyn CollisionMasks,
    ) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::new(
                "dt",
                format!("tick duration must be positive and finite, got {}", dt),
            ));
        }
        Ok(Self {
            dt,
            gravity,
            world,
            masks,
        })
    }
}

/// Per-tick input, passed in explicitly by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Analog axes in `[-1, 1]`.
    pub axis: Vec2,
    pub jump_pressed: bool,
    pub dash_pressed: bool,
    /// Digital (dpad-style) direction for dashes.
    pub dash_direction: Vec2,
    pub halt_pressed: bool,
}

/// Unit horizontal direction for the sign of `x`, or `None` at zero.
pub fn horizontal_dir(x: f32) -> Option<Dir2> {
    if x > 0.0 {
        Some(Dir2::X)
    } else if x < 0.0 {
        Some(Dir2::NEG_X)
    } else {
        None
    }
}

/// `tan` of the angle between a surface normal and world up.
pub fn slope_tangent(normal: Vec2) -> f32 {
    let normal = normal.normalize_or_zero();
    if normal.y <= 0.0 {
        return 0.0;
    }
    normal.x.abs() / normal.y
}
