mod board;
mod events;
mod resources;
mod systems;

use bevy::prelude::*;
use game_core::TicTacToe;

pub use events::{GameDraw, GameReset, MoveMade, SignWon, TilePressed, TurnStart};
pub use resources::Images;

use systems::{apply_action, reset_game};

pub const BOARD_DIVISIONS: usize = 3;

pub const X_SPRITE_PATH: &str = "sprites/X.png";
pub const O_SPRITE_PATH: &str = "sprites/O.png";

/// The single local game, owned by the app for the lifetime of the window.
#[derive(Debug, Default, Deref, DerefMut, Resource)]
pub struct LocalGame(TicTacToe);

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(board::BoardPlugin)
            .init_resource::<LocalGame>()
            .init_resource::<Images>()
            .add_event::<TilePressed>()
            .add_event::<MoveMade>()
            .add_event::<TurnStart>()
            .add_event::<SignWon>()
            .add_event::<GameDraw>()
            .add_event::<GameReset>()
            .add_systems(Update, (apply_action, reset_game));
    }
}
