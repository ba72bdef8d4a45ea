mod components;
mod systems;

use bevy::prelude::*;

use systems::{clear_tiles, create, handle_mouse_input, set_tile_image};

pub const BORDER_WIDTH: f32 = 2.0;

/// Mark images are drawn slightly smaller than their grid section.
pub const MARK_TO_SECTION_RATIO: f32 = 0.8;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, create).add_systems(
            Update,
            (handle_mouse_input, set_tile_image, clear_tiles),
        );
    }
}
