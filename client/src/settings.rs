use bevy::prelude::Resource;
use clap::Parser;

use crate::game::BOARD_DIVISIONS;

pub const WINDOW_TITLE: &str = "Tic Tac Toe";

/// Height of the status panel below the board.
pub const PANEL_HEIGHT: f32 = 100.0;

#[derive(Debug, Parser)]
#[command(about = "Local two-player tic-tac-toe")]
pub struct Args {
    /// Side length of the square board area in pixels
    #[arg(long, default_value_t = 600.0)]
    board_size: f32,

    /// Grid divisions per axis
    #[arg(long, default_value_t = BOARD_DIVISIONS)]
    divisions: usize,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("at the moment only a 3x3 grid is supported (found: {found})")]
    UnsupportedDivisions { found: usize },
    #[error("board size must be positive (found: {found})")]
    InvalidBoardSize { found: f32 },
}

/// Validated window and board geometry, shared with every system.
#[derive(Debug, PartialEq, Resource)]
pub struct Settings {
    board_size: f32,
    divisions: usize,
}

impl TryFrom<Args> for Settings {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        Self::new(args.board_size, args.divisions)
    }
}

impl Settings {
    pub fn new(board_size: f32, divisions: usize) -> Result<Self, ConfigError> {
        // the winning combinations are fixed for a 3x3 grid
        if divisions != BOARD_DIVISIONS {
            return Err(ConfigError::UnsupportedDivisions { found: divisions });
        }
        if !board_size.is_finite() || board_size <= 0.0 {
            return Err(ConfigError::InvalidBoardSize { found: board_size });
        }
        Ok(Self {
            board_size,
            divisions,
        })
    }

    pub fn board_size(&self) -> f32 {
        self.board_size
    }

    pub fn divisions(&self) -> usize {
        self.divisions
    }

    pub fn window_width(&self) -> f32 {
        self.board_size
    }

    pub fn window_height(&self) -> f32 {
        self.board_size + PANEL_HEIGHT
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(board_size: f32, divisions: usize) -> Args {
        Args {
            board_size,
            divisions,
        }
    }

    #[test]
    fn three_divisions_are_accepted() {
        let settings = Settings::try_from(args(300.0, 3)).unwrap();
        assert_eq!(settings.board_size(), 300.0);
        assert_eq!(settings.window_height(), 300.0 + PANEL_HEIGHT);
    }

    #[test]
    fn other_grid_sizes_are_a_configuration_error() {
        assert_eq!(
            Settings::try_from(args(300.0, 4)),
            Err(ConfigError::UnsupportedDivisions { found: 4 })
        );
        assert_eq!(
            Settings::try_from(args(300.0, 0)),
            Err(ConfigError::UnsupportedDivisions { found: 0 })
        );
    }

    #[test]
    fn degenerate_board_size_is_a_configuration_error() {
        assert_eq!(
            Settings::try_from(args(0.0, 3)),
            Err(ConfigError::InvalidBoardSize { found: 0.0 })
        );
    }
}
