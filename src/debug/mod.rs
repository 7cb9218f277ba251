//! Debug domain: dev overlay with live controller state.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{Player, VerticalMotion};
use crate::powerup::PowerUpPhase;

/// Marker for the dev readout text
#[derive(Component, Debug)]
pub struct DebugReadout;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_readout)
            .add_systems(Update, update_readout);
    }
}

fn spawn_readout(mut commands: Commands) {
    commands.spawn((
        DebugReadout,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            ..default()
        },
        ZIndex(500),
    ));
}

fn update_readout(
    player_query: Query<(&Transform, &LinearVelocity, &VerticalMotion, &PowerUpPhase), With<Player>>,
    mut text_query: Query<&mut Text, With<DebugReadout>>,
) {
    let Some((transform, velocity, motion, phase)) = player_query.iter().next() else {
        return;
    };

    let power_up = match phase {
        PowerUpPhase::Inactive => "inactive".to_string(),
        PowerUpPhase::Active { elapsed } => format!("active {:.1}s", elapsed),
    };

    for mut text in &mut text_query {
        text.0 = format!(
            "pos ({:.1}, {:.1})\nvel ({:.1}, {:.1})\nstate {:?}{}\npower-up {}",
            transform.translation.x,
            transform.translation.y,
            velocity.x,
            velocity.y,
            motion.state,
            if motion.wall_contact { " +wall" } else { "" },
            power_up,
        );
    }
}
