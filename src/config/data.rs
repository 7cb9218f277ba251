//! Config domain: serde definitions for the tuning file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningFile {
    pub player: PlayerTuningDef,
    pub power_up: PowerUpTuningDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerTuningDef {
    pub move_speed: f32,
    pub apex_height: f32,
    pub jump_boost: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PowerUpTuningDef {
    pub duration: f32,
    pub active_scale: f32,
    pub idle_scale: f32,
    pub overlay_alpha: f32,
}
