//! Power-up domain: timed pickup with scale and overlay side effects.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{PowerUpOverlay, PowerUpPhase, PowerUpPickup};
pub use events::PowerUpTriggered;
pub use resources::PowerUpTuning;

use bevy::prelude::*;

use crate::powerup::systems::{apply_power_up_visuals, collect_power_up, tick_power_up};

pub struct PowerUpPlugin;

impl Plugin for PowerUpPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PowerUpTuning>()
            .add_message::<PowerUpTriggered>()
            .add_systems(
                Update,
                (collect_power_up, tick_power_up, apply_power_up_visuals).chain(),
            );
    }
}
