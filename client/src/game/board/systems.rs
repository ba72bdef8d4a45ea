use bevy::input::mouse::MouseButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use game_core::{coords, GridIndex};

use super::components::{BorderBundle, Tile, TileBundle};
use super::{BORDER_WIDTH, MARK_TO_SECTION_RATIO};
use crate::game::{GameReset, Images, MoveMade, TilePressed};
use crate::settings::Settings;

/// Converts a window position (origin in the top left corner, y down)
/// into a world position (origin in the window center, y up).
fn window_to_world(window_size: Vec2, position: Vec2) -> Vec2 {
    Vec2::new(
        position.x - window_size.x / 2.0,
        window_size.y / 2.0 - position.y,
    )
}

/// Returns the world translation of the center of a tile.
fn tile_center(settings: &Settings, index: GridIndex) -> Vec2 {
    let (x, y) = coords::cell_center_of(index, settings.board_size(), settings.divisions());
    window_to_world(
        Vec2::new(settings.window_width(), settings.window_height()),
        Vec2::new(x, y),
    )
}

/// Spawns the empty tiles and the grid lines between them.
pub fn create(mut commands: Commands, settings: Res<Settings>) {
    let section = settings.board_size() / settings.divisions() as f32;
    let mark_size = Vec2::splat(section * MARK_TO_SECTION_RATIO);
    for row in 0..settings.divisions() {
        for col in 0..settings.divisions() {
            let index = GridIndex::new(row, col);
            let translation = tile_center(&settings, index).extend(1.0);
            commands.spawn(TileBundle::new_empty(mark_size, translation, index));
        }
    }
    let window_size = Vec2::new(settings.window_width(), settings.window_height());
    for i in 1..settings.divisions() {
        let offset = section * i as f32;
        let v_center =
            window_to_world(window_size, Vec2::new(offset, settings.board_size() / 2.0));
        commands.spawn(BorderBundle::new(
            Color::BLACK,
            Vec2::new(BORDER_WIDTH, settings.board_size()),
            v_center.extend(1.0),
        ));
        let h_center =
            window_to_world(window_size, Vec2::new(settings.board_size() / 2.0, offset));
        commands.spawn(BorderBundle::new(
            Color::BLACK,
            Vec2::new(settings.board_size(), BORDER_WIDTH),
            h_center.extend(1.0),
        ));
    }
}

/// Resolves mouse presses to grid cells. Presses outside the grid
/// (including the status panel below it) are dropped here.
pub fn handle_mouse_input(
    window: Query<&Window, With<PrimaryWindow>>,
    settings: Res<Settings>,
    mut button_evr: EventReader<MouseButtonInput>,
    mut pressed: EventWriter<TilePressed>,
) {
    let Ok(window) = window.get_single() else {
        error!("failed to get single window");
        return;
    };
    for event in button_evr.read() {
        if !event.state.is_pressed() {
            continue;
        }
        let Some(cursor) = window.cursor_position() else {
            continue;
        };
        match coords::cell_index_of(
            (cursor.x, cursor.y),
            settings.board_size(),
            settings.divisions(),
        ) {
            Ok(index) => {
                debug!("tile {} pressed", index);
                pressed.send(TilePressed(index));
            }
            Err(err) => debug!("press ignored: {}", err),
        }
    }
}

/// Receive [`MoveMade`] event and reveal the mark image on its tile.
pub fn set_tile_image(
    mut tiles: Query<(&mut Sprite, &mut Visibility, &Tile)>,
    mut move_made: EventReader<MoveMade>,
    images: Res<Images>,
) {
    for event in move_made.read() {
        let Some((mut sprite, mut visibility, _)) = tiles
            .iter_mut()
            .find(|(.., tile)| tile.index() == event.cell())
        else {
            error!("unable to get tile with position: {}", event.cell());
            continue;
        };
        sprite.image = images.get(event.sign()).clone();
        *visibility = Visibility::Inherited;
    }
}

/// Receive [`GameReset`] event and hide every mark.
pub fn clear_tiles(
    mut tiles: Query<&mut Visibility, With<Tile>>,
    mut game_reset: EventReader<GameReset>,
) {
    for _ in game_reset.read() {
        for mut visibility in tiles.iter_mut() {
            *visibility = Visibility::Hidden;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn window_to_world_flips_y_around_the_center() {
        let window_size = Vec2::new(300.0, 400.0);
        assert_eq!(
            window_to_world(window_size, Vec2::new(150.0, 200.0)),
            Vec2::ZERO
        );
        assert_eq!(
            window_to_world(window_size, Vec2::new(0.0, 0.0)),
            Vec2::new(-150.0, 200.0)
        );
        assert_eq!(
            window_to_world(window_size, Vec2::new(300.0, 400.0)),
            Vec2::new(150.0, -200.0)
        );
    }

    #[test]
    fn tiles_are_centered_in_their_sections() {
        let settings = Settings::new(300.0, 3).unwrap();
        // top left cell center is at (50, 50) in window coordinates,
        // the window is 300x400 with the panel below the board
        assert_eq!(
            tile_center(&settings, GridIndex::new(0, 0)),
            Vec2::new(-100.0, 150.0)
        );
        assert_eq!(
            tile_center(&settings, GridIndex::new(2, 2)),
            Vec2::new(100.0, -50.0)
        );
    }
}
