//! Movement domain: debug-only test room for trying the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, OneWayPlatform, Wall};

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    // Solid from above only; `OneWayPlatformHooks` drops contacts from below.
    let one_way_layers = CollisionLayers::new(GameLayer::OneWayPlatform, [GameLayer::Player]);

    // Ground, top surface at y = -0.5
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(24.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -1.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(24.0, 1.0),
        ground_layers,
    ));

    // Left wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(1.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(-12.5, 5.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1.0, 12.0),
        wall_layers,
    ));

    // Right wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(1.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(12.5, 5.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1.0, 12.0),
        wall_layers,
    ));

    // 25 degree ramp rising to the right
    let ramp_angle = 25.0_f32.to_radians();
    let ramp_length = 5.0;
    let ramp_center = Vec2::new(6.0, -0.5 + ramp_length * 0.5 * ramp_angle.sin() - 0.25);
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(ramp_length, 0.5)),
            ..default()
        },
        Transform::from_translation(ramp_center.extend(0.0))
            .with_rotation(Quat::from_rotation_z(ramp_angle)),
        RigidBody::Static,
        Collider::rectangle(ramp_length, 0.5),
        ground_layers,
    ));

    // One-way ledge
    commands.spawn((
        OneWayPlatform,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(3.0, 0.25)),
            ..default()
        },
        Transform::from_xyz(-5.0, 2.5, 0.0),
        RigidBody::Static,
        Collider::rectangle(3.0, 0.25),
        one_way_layers,
        ActiveCollisionHooks::MODIFY_CONTACTS,
    ));

    // Pillar for wall jumping practice
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(1.0, 5.0)),
            ..default()
        },
        Transform::from_xyz(-9.0, 2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1.0, 5.0),
        wall_layers,
    ));
}

pub(crate) fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 4.0, 0.0).with_scale(Vec3::splat(1.0 / 48.0)),
    ));
}
