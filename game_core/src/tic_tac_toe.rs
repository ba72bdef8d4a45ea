use std::fmt::{Display, Formatter};

use crate::board::Board;
use crate::error::GameError;
use crate::grid::GridIndex;
use crate::GameResult;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sign {
    X,
    O,
}

impl Sign {
    /// Returns the sign that moves after `self`.
    pub fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FinishedState {
    Win(Sign),
    Draw,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameState {
    Turn(Sign),
    Finished(FinishedState),
}

/// The 8 index triples that win the game when uniformly occupied:
/// rows, then columns, then the two diagonals.
pub fn winning_combinations() -> [(GridIndex, GridIndex, GridIndex); 8] {
    [
        (
            GridIndex::new(0, 0),
            GridIndex::new(0, 1),
            GridIndex::new(0, 2),
        ),
        (
            GridIndex::new(1, 0),
            GridIndex::new(1, 1),
            GridIndex::new(1, 2),
        ),
        (
            GridIndex::new(2, 0),
            GridIndex::new(2, 1),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(0, 0),
            GridIndex::new(1, 0),
            GridIndex::new(2, 0),
        ),
        (
            GridIndex::new(0, 1),
            GridIndex::new(1, 1),
            GridIndex::new(2, 1),
        ),
        (
            GridIndex::new(0, 2),
            GridIndex::new(1, 2),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(0, 0),
            GridIndex::new(1, 1),
            GridIndex::new(2, 2),
        ),
        (
            GridIndex::new(2, 0),
            GridIndex::new(1, 1),
            GridIndex::new(0, 2),
        ),
    ]
}

/// Inspects `board` against [`winning_combinations`].
/// Returns the finished state or [`None`] while the game is still open.
/// Pure and callable after every move, a tie requires a full board.
pub fn evaluate(board: &Board) -> Option<FinishedState> {
    for (idx1, idx2, idx3) in winning_combinations() {
        if let (Some(s1), Some(s2), Some(s3)) = (*board[idx1], *board[idx2], *board[idx3]) {
            if s1 == s2 && s2 == s3 {
                return Some(FinishedState::Win(s1));
            }
        }
    }
    if board.is_full() {
        return Some(FinishedState::Draw);
    }
    None
}

/// Local two-player game: the board plus the turn state machine.
/// X always makes the first move.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    board: Board,
    state: GameState,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            state: GameState::Turn(Sign::X),
        }
    }

    /// Places `sign` at `cell` and returns the resulting state.
    /// Rejects moves on a finished game, out of turn order or on an
    /// occupied cell, leaving the board untouched.
    pub fn update(&mut self, sign: Sign, cell: GridIndex) -> GameResult<GameState> {
        let current = match self.state {
            GameState::Finished(_) => return Err(GameError::GameIsFinished),
            GameState::Turn(current) => current,
        };
        if sign != current {
            return Err(GameError::not_your_turn(current, sign));
        }
        self.board.place(cell, sign)?;
        self.state = match evaluate(&self.board) {
            Some(finished) => GameState::Finished(finished),
            None => GameState::Turn(sign.other()),
        };
        Ok(self.state)
    }

    /// Returns the game to its initial value: empty board, X to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = GameState::Turn(Sign::X);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, GameState::Finished(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn filled_board(moves: &[(usize, usize, Sign)]) -> Board {
        let mut board = Board::default();
        for &(row, col, sign) in moves {
            board.place(GridIndex::new(row, col), sign).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::default()), None);
    }

    #[test]
    fn first_row_wins() {
        let board = filled_board(&[
            (0, 0, Sign::X),
            (0, 1, Sign::X),
            (0, 2, Sign::X),
        ]);
        assert_eq!(evaluate(&board), Some(FinishedState::Win(Sign::X)));
    }

    #[test]
    fn column_and_diagonal_win() {
        let column = filled_board(&[(0, 1, Sign::O), (1, 1, Sign::O), (2, 1, Sign::O)]);
        assert_eq!(evaluate(&column), Some(FinishedState::Win(Sign::O)));
        let diagonal = filled_board(&[(2, 0, Sign::X), (1, 1, Sign::X), (0, 2, Sign::X)]);
        assert_eq!(evaluate(&diagonal), Some(FinishedState::Win(Sign::X)));
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X
        // O X O
        // O X O
        let board = filled_board(&[
            (0, 0, Sign::X),
            (0, 1, Sign::O),
            (0, 2, Sign::X),
            (1, 0, Sign::O),
            (1, 1, Sign::X),
            (1, 2, Sign::O),
            (2, 0, Sign::O),
            (2, 1, Sign::X),
            (2, 2, Sign::O),
        ]);
        assert_eq!(evaluate(&board), Some(FinishedState::Draw));
    }

    #[test]
    fn evaluate_is_idempotent() {
        let mut board = Board::default();
        for (row, col, sign) in [(0, 0, Sign::X), (1, 1, Sign::O), (0, 1, Sign::X)] {
            board.place(GridIndex::new(row, col), sign).unwrap();
            assert_eq!(evaluate(&board), evaluate(&board));
        }
    }

    #[test]
    fn combinations_are_checked_in_enumeration_order() {
        // hand-built board holding two complete lines, the first row is
        // enumerated before the last one regardless of insertion order
        let board = filled_board(&[
            (2, 0, Sign::O),
            (2, 1, Sign::O),
            (2, 2, Sign::O),
            (0, 0, Sign::X),
            (0, 1, Sign::X),
            (0, 2, Sign::X),
        ]);
        assert_eq!(evaluate(&board), Some(FinishedState::Win(Sign::X)));
    }

    #[test]
    fn x_moves_first_and_signs_alternate() {
        let mut game = TicTacToe::new();
        assert_eq!(game.state(), GameState::Turn(Sign::X));
        assert_eq!(
            game.update(Sign::O, GridIndex::new(0, 0)),
            Err(GameError::not_your_turn(Sign::X, Sign::O))
        );
        assert_eq!(
            game.update(Sign::X, GridIndex::new(0, 0)).unwrap(),
            GameState::Turn(Sign::O)
        );
        assert_eq!(
            game.update(Sign::O, GridIndex::new(1, 1)).unwrap(),
            GameState::Turn(Sign::X)
        );
    }

    #[test]
    fn occupied_cell_keeps_the_turn() {
        let mut game = TicTacToe::new();
        game.update(Sign::X, GridIndex::new(0, 0)).unwrap();
        assert_eq!(
            game.update(Sign::O, GridIndex::new(0, 0)),
            Err(GameError::cell_is_occupied(0, 0))
        );
        assert_eq!(game.state(), GameState::Turn(Sign::O));
        assert_eq!(game.board().moves().len(), 1);
    }

    #[test]
    fn finished_game_rejects_further_moves() {
        let mut game = TicTacToe::new();
        // X X X over the top row, O elsewhere
        game.update(Sign::X, GridIndex::new(0, 0)).unwrap();
        game.update(Sign::O, GridIndex::new(1, 0)).unwrap();
        game.update(Sign::X, GridIndex::new(0, 1)).unwrap();
        game.update(Sign::O, GridIndex::new(1, 1)).unwrap();
        assert_eq!(
            game.update(Sign::X, GridIndex::new(0, 2)).unwrap(),
            GameState::Finished(FinishedState::Win(Sign::X))
        );
        assert!(game.is_finished());
        assert_eq!(
            game.update(Sign::O, GridIndex::new(2, 2)),
            Err(GameError::GameIsFinished)
        );
        assert_eq!(game.board().moves().len(), 5);
    }

    #[test]
    fn played_out_game_ends_in_a_draw() {
        let mut game = TicTacToe::new();
        // X O X
        // X O O
        // O X X
        let moves = [
            (Sign::X, (0, 0)),
            (Sign::O, (0, 1)),
            (Sign::X, (0, 2)),
            (Sign::O, (1, 1)),
            (Sign::X, (1, 0)),
            (Sign::O, (1, 2)),
            (Sign::X, (2, 1)),
            (Sign::O, (2, 0)),
            (Sign::X, (2, 2)),
        ];
        for (sign, (row, col)) in moves.into_iter().take(8) {
            assert_eq!(
                game.update(sign, GridIndex::new(row, col)).unwrap(),
                GameState::Turn(sign.other())
            );
        }
        assert_eq!(
            game.update(Sign::X, GridIndex::new(2, 2)).unwrap(),
            GameState::Finished(FinishedState::Draw)
        );
    }

    #[test]
    fn reset_returns_to_the_first_move() {
        let mut game = TicTacToe::new();
        // play out a win for X over the first column
        game.update(Sign::X, GridIndex::new(0, 0)).unwrap();
        game.update(Sign::O, GridIndex::new(0, 1)).unwrap();
        game.update(Sign::X, GridIndex::new(1, 0)).unwrap();
        game.update(Sign::O, GridIndex::new(1, 1)).unwrap();
        game.update(Sign::X, GridIndex::new(2, 0)).unwrap();
        assert!(game.is_finished());
        game.reset();
        assert_eq!(game.state(), GameState::Turn(Sign::X));
        assert!(game.board().moves().is_empty());
        assert!(game.board().all_indexed().all(|(_, cell)| cell.is_none()));
        // a fresh game can be played after reset
        game.update(Sign::X, GridIndex::new(1, 1)).unwrap();
    }
}
