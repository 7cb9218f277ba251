//! Player domain: the vertical-motion state machine.
//!
//! Pure data and transitions, no engine types beyond the `Component`
//! derive. Systems feed in input, velocity, and contacts; tests drive the
//! same surface directly.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalState {
    Grounded,
    Jumping,
    /// Spawn state: the character settles onto the ground through the
    /// ordinary ground-contact transition.
    #[default]
    Falling,
}

/// A classified contact from the physics host. Contacts never mutate the
/// state machine at the callback site; they queue up and are applied in
/// arrival order once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    GroundBegin,
    GroundEnd,
    WallBegin,
    WallEnd,
    /// The underside of a floating block, bumped from below.
    BumpBlock,
    /// The power-up pickup trigger volume.
    PickupEnter,
}

/// Vertical-motion state plus the wall-contact flag. The flag lives beside
/// the enum, never inside it; its only coupling is the forced fall when
/// ground contact is lost while touching a wall.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct VerticalMotion {
    pub state: VerticalState,
    pub wall_contact: bool,
}

impl VerticalMotion {
    /// Apply one queued contact.
    pub fn apply_contact(&mut self, contact: ContactEvent) {
        match contact {
            ContactEvent::GroundBegin => self.state = VerticalState::Grounded,
            ContactEvent::GroundEnd => {
                if self.wall_contact {
                    self.state = VerticalState::Falling;
                }
            }
            ContactEvent::WallBegin => self.wall_contact = true,
            ContactEvent::WallEnd => self.wall_contact = false,
            ContactEvent::BumpBlock | ContactEvent::PickupEnter => {
                self.state = VerticalState::Falling;
            }
        }
    }

    /// Advance one tick. Input transitions run first; the apex cap runs
    /// last and overrides them regardless of input. Once Falling, input
    /// alone cannot restart a jump — only a ground contact resets the
    /// cycle.
    pub fn advance(&mut self, jump_held: bool, velocity_y: f32, apex_height: f32) {
        match self.state {
            VerticalState::Grounded if jump_held => self.state = VerticalState::Jumping,
            VerticalState::Jumping if !jump_held => self.state = VerticalState::Falling,
            _ => {}
        }

        if self.state != VerticalState::Falling && velocity_y > apex_height {
            self.state = VerticalState::Falling;
        }
    }

    /// Vertical velocity change for this tick, given the post-transition
    /// state. The jump boost is a fixed per-tick increment; gravity scales
    /// with elapsed tick time. Grounded leaves vertical velocity to the
    /// physics host.
    pub fn velocity_delta(&self, jump_boost: f32, gravity_y: f32, dt: f32) -> f32 {
        match self.state {
            VerticalState::Jumping => jump_boost,
            VerticalState::Falling => gravity_y * dt,
            VerticalState::Grounded => 0.0,
        }
    }
}

/// Horizontal displacement for one tick, independent of vertical state.
pub fn horizontal_displacement(axis: f32, move_speed: f32, dt: f32) -> f32 {
    axis * move_speed * dt
}
