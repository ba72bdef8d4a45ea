pub mod common;

mod components;
mod events;
mod systems;

use bevy::prelude::*;

pub use events::ResetPressed;

use systems::{
    create, handle_reset_button, reset_status, set_draw, set_winner, update_next_turn,
    update_reset_button_color, update_reset_button_visibility,
};

pub struct InterfacePlugin;

impl Plugin for InterfacePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ResetPressed>()
            .add_systems(Startup, create)
            .add_systems(
                Update,
                (
                    handle_reset_button,
                    update_reset_button_color,
                    update_reset_button_visibility,
                    update_next_turn,
                    set_winner,
                    set_draw,
                    reset_status,
                ),
            );
    }
}
