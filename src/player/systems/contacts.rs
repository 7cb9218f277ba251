//! Player domain: contact collection from the physics host.
//!
//! Collision and trigger messages are classified by marker component and
//! pushed onto the contact queue; entities carrying no marker are ignored.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::player::state::ContactEvent;
use crate::player::{BumpBlock, ContactQueue, Ground, Player, Wall};
use crate::powerup::PowerUpPickup;

pub(crate) fn collect_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut queue: ResMut<ContactQueue>,
    player_query: Query<Entity, With<Player>>,
    ground_query: Query<(), With<Ground>>,
    wall_query: Query<(), With<Wall>>,
    bump_query: Query<(), With<BumpBlock>>,
    pickup_query: Query<(), With<PowerUpPickup>>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        // Consume events if no player
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = other_participant(event.collider1, event.collider2, player_entity)
        else {
            continue;
        };

        if ground_query.contains(other) {
            queue.events.push_back(ContactEvent::GroundBegin);
        } else if wall_query.contains(other) {
            queue.events.push_back(ContactEvent::WallBegin);
        } else if bump_query.contains(other) {
            queue.events.push_back(ContactEvent::BumpBlock);
        } else if pickup_query.contains(other) {
            queue.events.push_back(ContactEvent::PickupEnter);
        }
    }

    for event in collision_end_events.read() {
        let Some(other) = other_participant(event.collider1, event.collider2, player_entity)
        else {
            continue;
        };

        if ground_query.contains(other) {
            queue.events.push_back(ContactEvent::GroundEnd);
        } else if wall_query.contains(other) {
            queue.events.push_back(ContactEvent::WallEnd);
        }
    }
}

fn other_participant(collider1: Entity, collider2: Entity, player: Entity) -> Option<Entity> {
    if collider1 == player {
        Some(collider2)
    } else if collider2 == player {
        Some(collider1)
    } else {
        None
    }
}
