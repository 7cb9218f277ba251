//! Power-up domain: message definitions.

use bevy::ecs::message::Message;

/// Fired from the player domain's contact drain when the character enters
/// the pickup trigger volume.
#[derive(Debug)]
pub struct PowerUpTriggered;

impl Message for PowerUpTriggered {}
