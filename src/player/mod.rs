//! Player domain: input, contact queue, and the vertical-motion machine.

mod components;
mod resources;
mod spawn;
pub mod state;
mod systems;


pub use components::{BumpBlock, GameLayer, Ground, Player, Wall};
pub use resources::{ContactQueue, MovementInput, MovementTuning};
pub use state::{VerticalMotion, VerticalState};

use bevy::prelude::*;

use crate::player::spawn::spawn_player;
use crate::player::systems::{
    advance_vertical_state, apply_horizontal_movement, apply_vertical_velocity, collect_contacts,
    drain_contacts, read_input,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<ContactQueue>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input)
            .add_systems(
                FixedUpdate,
                (
                    collect_contacts,
                    drain_contacts,
                    advance_vertical_state,
                    apply_vertical_velocity,
                    apply_horizontal_movement,
                )
                    .chain(),
            );
    }
}
