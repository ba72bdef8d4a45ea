use crate::tic_tac_toe::Sign;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell ({row}, {col}) is occupied")]
    CellIsOccupied { row: usize, col: usize },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("other player's turn (expected: {expected}, found: {found})")]
    NotYourTurn { expected: Sign, found: Sign },
    #[error("point ({x}, {y}) is outside the board")]
    PointOutOfBounds { x: f32, y: f32 },
}

impl GameError {
    pub fn cell_is_occupied(row: usize, col: usize) -> Self {
        Self::CellIsOccupied { row, col }
    }

    pub fn not_your_turn(expected: Sign, found: Sign) -> Self {
        Self::NotYourTurn { expected, found }
    }

    pub fn point_out_of_bounds(x: f32, y: f32) -> Self {
        Self::PointOutOfBounds { x, y }
    }
}
