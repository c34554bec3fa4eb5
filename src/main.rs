use avian2d::prelude::*;
use bevy::prelude::*;

use platformer_kcc::content::ContentPlugin;
use platformer_kcc::movement::{MovementPlugin, OneWayPlatformHooks};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Platformer".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default().with_collision_hooks::<OneWayPlatformHooks>())
        .add_plugins((ContentPlugin::default(), MovementPlugin))
        .run();
}
