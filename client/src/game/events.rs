use bevy::prelude::{Deref, Event};
use game_core::{GridIndex, Sign};

/// Event emitted when a mouse press lands inside a grid cell.
#[derive(Clone, Copy, Debug, Deref, Event)]
pub struct TilePressed(pub GridIndex);

/// Event emitted after the game accepted a placement.
#[derive(Clone, Copy, Debug, Event)]
pub struct MoveMade {
    sign: Sign,
    cell: GridIndex,
}

impl MoveMade {
    pub fn new(sign: Sign, cell: GridIndex) -> Self {
        Self { sign, cell }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn cell(&self) -> GridIndex {
        self.cell
    }
}

/// Event emitted when the turn passes, holds the sign to move next.
#[derive(Clone, Copy, Debug, Deref, Event)]
pub struct TurnStart(pub Sign);

/// Event emitted when a sign completes a winning line.
#[derive(Clone, Copy, Debug, Deref, Event)]
pub struct SignWon(pub Sign);

/// Event emitted when the board fills up with no winner.
#[derive(Clone, Copy, Debug, Event)]
pub struct GameDraw;

/// Event emitted after the game has been returned to its initial state.
#[derive(Clone, Copy, Debug, Event)]
pub struct GameReset;
