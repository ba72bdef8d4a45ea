pub mod board;
pub mod coords;
mod error;
pub mod grid;
pub mod tic_tac_toe;

use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

pub use board::{Board, Cell, Move};
pub use error::GameError;
pub use grid::GridIndex;
pub use tic_tac_toe::{
    evaluate, winning_combinations, FinishedState, GameState, Sign, TicTacToe,
};

pub type GameResult<T> = Result<T, GameError>;

/// A single cell of a game board, possibly occupied by `T`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T: Display> Display for BoardCell<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(val) => write!(f, "[{}]", val),
            None => f.write_str("[ ]"),
        }
    }
}

impl<T> From<T> for BoardCell<T> {
    fn from(value: T) -> Self {
        Self(Option::from(value))
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for BoardCell<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
