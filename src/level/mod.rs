//! Level domain: hard-coded demo scene and startup validation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{BumpBlock, GameLayer, Ground, Player, Wall};
use crate::powerup::{PowerUpOverlay, PowerUpPickup};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level)
            .add_systems(PostStartup, validate_scene);
    }
}

fn spawn_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let block_color = Color::srgb(0.5, 0.4, 0.3);
    let pickup_color = Color::srgb(0.9, 0.8, 0.3);

    let solid_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let sensor_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);

    // Ground slab, top edge at y = 0
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(24.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Static,
        Collider::rectangle(24.0, 1.0),
        solid_layers,
    ));

    // Side walls
    for x in [-12.5, 12.5] {
        commands.spawn((
            Wall,
            Sprite {
                color: wall_color,
                custom_size: Some(Vec2::new(1.0, 14.0)),
                ..default()
            },
            Transform::from_xyz(x, 6.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(1.0, 14.0),
            wall_layers,
        ));
    }

    // Floating block. The solid body carries no marker, so landing on top
    // of it is ignored by contact classification; only the sensor strip
    // along its underside feeds the state machine.
    commands.spawn((
        Sprite {
            color: block_color,
            custom_size: Some(Vec2::new(3.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(4.0, 4.5, 0.0),
        RigidBody::Static,
        Collider::rectangle(3.0, 1.0),
        solid_layers,
    ));
    commands.spawn((
        BumpBlock,
        Transform::from_xyz(4.0, 3.9, 0.0),
        RigidBody::Static,
        Collider::rectangle(2.8, 0.2),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers,
    ));

    // Power-up pickup: a non-solid trigger volume whose sprite doubles as
    // the overlay indicator.
    commands.spawn((
        PowerUpPickup,
        PowerUpOverlay,
        Sprite {
            color: pickup_color,
            custom_size: Some(Vec2::new(1.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(-5.0, 2.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(1.0, 1.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers,
    ));

    info!("Level spawned");
}

/// Required collaborators must exist before the first tick; a missing one
/// is an authoring error, not a runtime condition to limp through.
fn validate_scene(
    players: Query<(), (With<Player>, With<LinearVelocity>)>,
    overlays: Query<(), With<PowerUpOverlay>>,
) {
    let player_count = players.iter().count();
    if player_count != 1 {
        panic!("scene validation failed: expected one player with a velocity handle, found {player_count}");
    }

    let overlay_count = overlays.iter().count();
    if overlay_count != 1 {
        panic!("scene validation failed: expected one power-up overlay, found {overlay_count}");
    }

    info!("Scene validated: player and power-up overlay present");
}
