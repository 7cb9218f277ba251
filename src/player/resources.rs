//! Player domain: tuning, input, and contact-queue resources.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::player::state::ContactEvent;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Horizontal speed, world units per second.
    pub move_speed: f32,
    /// Vertical-velocity threshold above which a jump is forced into a fall.
    pub apex_height: f32,
    /// Upward velocity added per tick while jumping (not dt-scaled).
    pub jump_boost: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            apex_height: 10.0,
            jump_boost: 1.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1].
    pub axis: f32,
    pub jump_held: bool,
}

/// Contacts collected from the physics host, drained in arrival order at
/// the start of each fixed tick. Host-delivery timing can shift a contact
/// across a tick boundary but never reorders or interleaves it mid-tick.
#[derive(Resource, Debug, Default)]
pub struct ContactQueue {
    pub events: VecDeque<ContactEvent>,
}
