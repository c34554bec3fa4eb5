//! Movement domain: avian-backed raycasts and body access.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::{KinematicBody, OneWayPlatform, Player, RayHit, RaycastWorld};

/// Minimum upward component of a contact normal for a one-way platform to hold.
const ONE_WAY_MIN_NORMAL_Y: f32 = 0.5;

/// [`RaycastWorld`] over avian's spatial query pipeline.
pub(crate) struct AvianRaycaster<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
}

impl<'a, 'w, 's> AvianRaycaster<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self { spatial_query }
    }
}

impl RaycastWorld for AvianRaycaster<'_, '_, '_> {
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<RayHit> {
        // The player sits on its own layer, so the mask alone keeps it out of the results.
        let filter = SpatialQueryFilter::from_mask(mask);
        self.spatial_query
            .cast_ray(origin, direction, max_distance, true, &filter)
            .map(|hit| RayHit {
                distance: hit.distance,
                normal: hit.normal,
            })
    }
}

/// [`KinematicBody`] over a dynamic avian body.
///
/// Engine gravity is toggled through `GravityScale`.
pub(crate) struct AvianBody<'a> {
    transform: &'a mut Transform,
    velocity: &'a mut LinearVelocity,
    gravity_scale: &'a mut GravityScale,
}

impl<'a> AvianBody<'a> {
    pub(crate) fn new(
        transform: &'a mut Transform,
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
    ) -> Self {
        Self {
            transform,
            velocity,
            gravity_scale,
        }
    }
}

impl KinematicBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.transform.translation.truncate()
    }

    fn set_position(&mut self, position: Vec2) {
        self.transform.translation.x = position.x;
        self.transform.translation.y = position.y;
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity_scale.0 = if enabled { 1.0 } else { 0.0 };
    }
}

/// Whether a player/one-way-platform contact should push the player out.
///
/// `platform_to_player` is the contact normal pointing from the platform
/// towards the player. Only contacts from above, while not rising, hold.
pub(crate) fn one_way_contact_holds(platform_to_player: Vec2, player_velocity: Vec2) -> bool {
    platform_to_player.y > ONE_WAY_MIN_NORMAL_Y && player_velocity.y <= 0.0
}

/// Collision hooks making [`OneWayPlatform`] colliders solid from above only.
///
/// Colliders opt in with `ActiveCollisionHooks::MODIFY_CONTACTS`.
#[derive(SystemParam)]
pub struct OneWayPlatformHooks<'w, 's> {
    platforms: Query<'w, 's, (), With<OneWayPlatform>>,
    players: Query<'w, 's, &'static LinearVelocity, With<Player>>,
}

impl CollisionHooks for OneWayPlatformHooks<'_, '_> {
    fn modify_contacts(&self, contacts: &mut ContactPair, _commands: &mut Commands) -> bool {
        // Manifold normals point from the first collider to the second.
        let (sign, player_body) = if self.platforms.contains(contacts.collider1) {
            (1.0, contacts.body2)
        } else if self.platforms.contains(contacts.collider2) {
            (-1.0, contacts.body1)
        } else {
            return true;
        };

        let Some(velocity) = player_body.and_then(|body| self.players.get(body).ok()) else {
            return true;
        };

        contacts
            .manifolds
            .iter()
            .all(|manifold| one_way_contact_holds(manifold.normal * sign, velocity.0))
    }
}
