//! Core domain: camera setup and follow.

use bevy::prelude::*;

use crate::player::Player;

/// Orthographic zoom: world units are single-digit (speeds and heights in
/// the tuning file), so one unit maps to 40 screen pixels.
const CAMERA_SCALE: f32 = 0.025;

const FOLLOW_RATE: f32 = 5.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_player);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

fn follow_player(
    time: Res<Time>,
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };

    let target = player.translation.truncate();
    let t = (time.delta_secs() * FOLLOW_RATE).min(1.0);

    for mut camera in &mut camera_query {
        let eased = camera.translation.truncate().lerp(target, t);
        camera.translation.x = eased.x;
        camera.translation.y = eased.y;
    }
}
