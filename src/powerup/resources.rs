//! Power-up domain: tuning resource.

use bevy::prelude::*;

use crate::powerup::components::PowerUpPhase;

#[derive(Resource, Debug, Clone)]
pub struct PowerUpTuning {
    /// Seconds the power-up stays active.
    pub duration: f32,
    /// Player scale per axis while active.
    pub active_scale: f32,
    /// Player scale per axis while inactive.
    pub idle_scale: f32,
    /// Overlay sprite alpha while active; inactive restores full opacity.
    pub overlay_alpha: f32,
}

impl Default for PowerUpTuning {
    fn default() -> Self {
        Self {
            duration: 4.0,
            active_scale: 1.0,
            idle_scale: 0.75,
            overlay_alpha: 0.1,
        }
    }
}

impl PowerUpTuning {
    pub fn scale_for(&self, phase: &PowerUpPhase) -> f32 {
        if phase.is_active() {
            self.active_scale
        } else {
            self.idle_scale
        }
    }

    pub fn overlay_alpha_for(&self, phase: &PowerUpPhase) -> f32 {
        if phase.is_active() { self.overlay_alpha } else { 1.0 }
    }
}
