//! Player domain: system modules for the controller update.

pub(crate) mod contacts;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use contacts::collect_contacts;
pub(crate) use input::read_input;
pub(crate) use movement::{
    advance_vertical_state, apply_horizontal_movement, apply_vertical_velocity, drain_contacts,
};
