//! Power-up domain: activation, timer, and visual systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::player::Player;
use crate::powerup::components::{PowerUpOverlay, PowerUpPhase};
use crate::powerup::events::PowerUpTriggered;
use crate::powerup::resources::PowerUpTuning;

pub(crate) fn collect_power_up(
    mut events: MessageReader<PowerUpTriggered>,
    mut query: Query<&mut PowerUpPhase, With<Player>>,
) {
    if events.read().count() == 0 {
        return;
    }

    for mut phase in &mut query {
        if phase.activate() {
            info!("Power-up collected");
        }
    }
}

pub(crate) fn tick_power_up(
    time: Res<Time>,
    tuning: Res<PowerUpTuning>,
    mut query: Query<&mut PowerUpPhase, With<Player>>,
) {
    for mut phase in &mut query {
        if phase.tick(time.delta_secs(), tuning.duration) {
            info!("Power-up expired");
        }
    }
}

/// Push the phase onto the visuals: player scale and overlay tint. The
/// guards skip writes that would change nothing.
pub(crate) fn apply_power_up_visuals(
    tuning: Res<PowerUpTuning>,
    mut player_query: Query<(&PowerUpPhase, &mut Transform), With<Player>>,
    mut overlay_query: Query<&mut Sprite, With<PowerUpOverlay>>,
) {
    for (phase, mut transform) in &mut player_query {
        let scale = tuning.scale_for(phase);
        if transform.scale.x != scale || transform.scale.y != scale {
            transform.scale.x = scale;
            transform.scale.y = scale;
        }

        let alpha = tuning.overlay_alpha_for(phase);
        for mut sprite in &mut overlay_query {
            if sprite.color.alpha() != alpha {
                sprite.color.set_alpha(alpha);
            }
        }
    }
}
