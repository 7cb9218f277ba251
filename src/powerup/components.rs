//! Power-up domain: phase state and scene markers.

use bevy::prelude::*;

/// Timed power-up state carried by the player. The elapsed timer only
/// exists while active, so a stale value on an inactive power-up is
/// unrepresentable.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub enum PowerUpPhase {
    #[default]
    Inactive,
    Active { elapsed: f32 },
}

impl PowerUpPhase {
    /// Begin the active window with a fresh timer. A no-op while already
    /// active; returns whether activation happened.
    pub fn activate(&mut self) -> bool {
        match self {
            PowerUpPhase::Inactive => {
                *self = PowerUpPhase::Active { elapsed: 0.0 };
                true
            }
            PowerUpPhase::Active { .. } => false,
        }
    }

    /// Advance the timer by one frame; flips back to Inactive the moment
    /// `duration` is exceeded. Returns whether expiry happened this frame.
    pub fn tick(&mut self, dt: f32, duration: f32) -> bool {
        if let PowerUpPhase::Active { elapsed } = self {
            *elapsed += dt;
            if *elapsed > duration {
                *self = PowerUpPhase::Inactive;
                return true;
            }
        }
        false
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PowerUpPhase::Active { .. })
    }

    pub fn elapsed(&self) -> Option<f32> {
        match self {
            PowerUpPhase::Active { elapsed } => Some(*elapsed),
            PowerUpPhase::Inactive => None,
        }
    }
}

/// Marker for the pickup trigger volume.
#[derive(Component, Debug)]
pub struct PowerUpPickup;

/// Marker for the sprite whose tint signals the pickup is non-interactive.
#[derive(Component, Debug)]
pub struct PowerUpOverlay;
