//! Movement domain: scripted world and body fakes for unit tests.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ActorTuning, BodyGeometry, BodyTuning, GameLayer, GameLayers, KinematicBody, PlatformerActor,
    RayHit, RaycastWorld, TickContext,
};

pub(crate) const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

/// One-sided line collider on a physics layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub layer: GameLayer,
}

impl Segment {
    fn intersect(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
        let edge = self.b - self.a;
        let denom = direction.perp_dot(edge);
        if denom.abs() < 1e-6 {
            return None;
        }

        let to_start = self.a - origin;
        let t = to_start.perp_dot(edge) / denom;
        let u = to_start.perp_dot(direction) / denom;
        if t < 0.0 || t > max_distance || !(0.0..=1.0).contains(&u) {
            return None;
        }

        let mut normal = edge.perp().normalize();
        if normal.dot(direction) > 0.0 {
            normal = -normal;
        }
        Some(RayHit {
            distance: t,
            normal,
        })
    }
}

#[derive(Debug, Default)]
pub(crate) struct TestWorld {
    pub segments: Vec<Segment>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segment(mut self, a: Vec2, b: Vec2, layer: GameLayer) -> Self {
        self.segments.push(Segment { a, b, layer });
        self
    }

    /// Horizontal ground surface at height `y` spanning `[x_min, x_max]`.
    pub fn with_floor(self, y: f32, x_min: f32, x_max: f32) -> Self {
        self.with_segment(Vec2::new(x_min, y), Vec2::new(x_max, y), GameLayer::Ground)
    }

    /// Vertical wall face at `x` spanning `[y_min, y_max]`.
    pub fn with_wall(self, x: f32, y_min: f32, y_max: f32) -> Self {
        self.with_segment(Vec2::new(x, y_min), Vec2::new(x, y_max), GameLayer::Wall)
    }

    /// Straight ramp from `start` rising at `angle` radians over `run` horizontal units.
    pub fn with_ramp(self, start: Vec2, angle: f32, run: f32) -> Self {
        let end = start + Vec2::new(run, run * angle.tan());
        self.with_segment(start, end, GameLayer::Ground)
    }
}

impl RaycastWorld for TestWorld {
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        self.segments
            .iter()
            .filter(|segment| mask.0 & segment.layer.to_bits() != 0)
            .filter_map(|segment| segment.intersect(origin, direction.as_vec2(), max_distance))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TestBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub gravity_enabled: bool,
}

impl TestBody {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            gravity_enabled: true,
        }
    }

    /// Stand-in for the engine step: gravity when enabled, then velocity into position.
    pub fn integrate(&mut self, gravity: Vec2, dt: f32) {
        if self.gravity_enabled {
            self.velocity += gravity * dt;
        }
        self.position += self.velocity * dt;
    }
}

impl KinematicBody for TestBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_enabled = enabled;
    }
}

pub(crate) fn ctx(world: &TestWorld, dt: f32) -> TickContext<'_> {
    TickContext::new(dt, GRAVITY, world, &GameLayers).unwrap()
}

pub(crate) fn actor_with(tuning: ActorTuning) -> PlatformerActor {
    PlatformerActor::new(BodyGeometry::default(), BodyTuning::default(), tuning).unwrap()
}

pub(crate) fn default_actor() -> PlatformerActor {
    actor_with(ActorTuning::default())
}

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
