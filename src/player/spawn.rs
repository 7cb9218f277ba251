//! Player domain: player body bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{GameLayer, Player, VerticalMotion};
use crate::powerup::PowerUpPhase;

pub(crate) fn spawn_player(mut commands: Commands) {
    commands.spawn((
        // Identity & movement
        (Player, VerticalMotion::default(), PowerUpPhase::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(0.8, 1.2)),
            ..default()
        },
        Transform::from_xyz(0.0, 3.0, 0.0).with_scale(Vec3::new(0.75, 0.75, 1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(0.8, 1.2),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // The state machine owns vertical motion
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
            ),
        ),
    ));
}
