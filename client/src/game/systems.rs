use bevy::prelude::*;
use game_core::{FinishedState, GameState};

use super::events::{GameDraw, GameReset, MoveMade, SignWon, TilePressed, TurnStart};
use super::LocalGame;
use crate::interface::ResetPressed;

/// Feeds pressed tiles into the game, one event per accepted move.
/// Rejected presses (occupied cell, finished game) change nothing.
pub fn apply_action(
    mut game: ResMut<LocalGame>,
    mut tile_pressed: EventReader<TilePressed>,
    mut move_made: EventWriter<MoveMade>,
    mut turn_start: EventWriter<TurnStart>,
    mut sign_won: EventWriter<SignWon>,
    mut game_draw: EventWriter<GameDraw>,
) {
    for event in tile_pressed.read() {
        let GameState::Turn(sign) = game.state() else {
            debug!("game is finished, press at {} ignored", **event);
            continue;
        };
        match game.update(sign, **event) {
            Ok(state) => {
                debug!("{} placed at {}", sign, **event);
                move_made.send(MoveMade::new(sign, **event));
                match state {
                    GameState::Turn(next) => {
                        turn_start.send(TurnStart(next));
                    }
                    GameState::Finished(FinishedState::Win(winner)) => {
                        sign_won.send(SignWon(winner));
                    }
                    GameState::Finished(FinishedState::Draw) => {
                        game_draw.send(GameDraw);
                    }
                }
            }
            Err(err) => debug!("press at {} rejected: {}", **event, err),
        }
    }
}

/// Returns the game to its initial state whenever reset is pressed.
pub fn reset_game(
    mut game: ResMut<LocalGame>,
    mut reset_pressed: EventReader<ResetPressed>,
    mut game_reset: EventWriter<GameReset>,
) {
    for _ in reset_pressed.read() {
        game.reset();
        debug!("game reset");
        game_reset.send(GameReset);
    }
}
