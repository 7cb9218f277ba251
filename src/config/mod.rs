//! Config domain: tuning-file definitions and startup load.

mod data;
mod loader;


pub use data::{PlayerTuningDef, PowerUpTuningDef, TuningFile};
pub use loader::{ConfigLoadError, load_tuning, parse_tuning};

use bevy::prelude::*;
use std::path::Path;

use crate::player::MovementTuning;
use crate::powerup::PowerUpTuning;

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_tuning);
    }
}

/// Copy file tuning onto the domain resources. A missing or malformed
/// file keeps the compiled-in defaults, which match the shipped file.
fn apply_tuning(mut movement: ResMut<MovementTuning>, mut power_up: ResMut<PowerUpTuning>) {
    match load_tuning(Path::new(TUNING_PATH)) {
        Ok(tuning) => {
            movement.move_speed = tuning.player.move_speed;
            movement.apex_height = tuning.player.apex_height;
            movement.jump_boost = tuning.player.jump_boost;

            power_up.duration = tuning.power_up.duration;
            power_up.active_scale = tuning.power_up.active_scale;
            power_up.idle_scale = tuning.power_up.idle_scale;
            power_up.overlay_alpha = tuning.power_up.overlay_alpha;

            info!("Loaded tuning from {}", TUNING_PATH);
        }
        Err(e) => {
            warn!("{}; using built-in defaults", e);
        }
    }
}
