//! Player domain: fixed-tick movement systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::player::state::{ContactEvent, horizontal_displacement};
use crate::player::{ContactQueue, MovementInput, MovementTuning, Player, VerticalMotion};
use crate::powerup::PowerUpTriggered;

/// Drain the contact queue in arrival order before the state machine
/// advances. The pickup trigger both forces a fall and notifies the
/// power-up domain.
pub(crate) fn drain_contacts(
    mut queue: ResMut<ContactQueue>,
    mut pickup_events: MessageWriter<PowerUpTriggered>,
    mut query: Query<&mut VerticalMotion, With<Player>>,
) {
    let Some(mut motion) = query.iter_mut().next() else {
        queue.events.clear();
        return;
    };

    while let Some(contact) = queue.events.pop_front() {
        let before = motion.state;
        motion.apply_contact(contact);
        if motion.state != before {
            debug!("Contact {:?}: {:?} -> {:?}", contact, before, motion.state);
        }

        if contact == ContactEvent::PickupEnter {
            pickup_events.write(PowerUpTriggered);
        }
    }
}

pub(crate) fn advance_vertical_state(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut VerticalMotion, &LinearVelocity), With<Player>>,
) {
    for (mut motion, velocity) in &mut query {
        let before = motion.state;
        motion.advance(input.jump_held, velocity.y, tuning.apex_height);
        if motion.state != before {
            debug!(
                "Tick: {:?} -> {:?} (v_y = {:.2})",
                before, motion.state, velocity.y
            );
        }
    }
}

pub(crate) fn apply_vertical_velocity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    gravity: Res<Gravity>,
    mut query: Query<(&VerticalMotion, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (motion, mut velocity) in &mut query {
        let delta = motion.velocity_delta(tuning.jump_boost, gravity.0.y, dt);
        if delta != 0.0 {
            velocity.y += delta;
        }
    }
}

/// Position is displaced directly, every tick, independent of vertical
/// state.
pub(crate) fn apply_horizontal_movement(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut Transform, With<Player>>,
) {
    if input.axis == 0.0 {
        return;
    }

    let dt = time.delta_secs();

    for mut transform in &mut query {
        transform.translation.x += horizontal_displacement(input.axis, tuning.move_speed, dt);
    }
}
