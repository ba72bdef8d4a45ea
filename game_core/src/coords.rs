//! Maps raw pointer coordinates to grid cells and cells back to their
//! pixel centers. The board is square, both axes are partitioned with
//! its side length as the unit.

use crate::error::GameError;
use crate::grid::GridIndex;
use crate::GameResult;

/// Returns the section a coordinate falls into when `[0, size]` is split
/// into `divisions` equal sections. Sections are left-open and
/// right-closed, a coordinate exactly at 0 belongs to no section.
fn section_of(value: f32, size: f32, divisions: usize) -> Option<usize> {
    let section_width = size / divisions as f32;
    (0..divisions).find(|&i| {
        section_width * (i as f32) < value && value <= section_width * (i + 1) as f32
    })
}

/// Resolves a pointer position to the cell it lands in.
/// Errors with [`GameError::PointOutOfBounds`] when either axis falls
/// outside `[0, board_size]`.
pub fn cell_index_of(
    point: (f32, f32),
    board_size: f32,
    divisions: usize,
) -> GameResult<GridIndex> {
    let (x, y) = point;
    let (Some(col), Some(row)) = (
        section_of(x, board_size, divisions),
        section_of(y, board_size, divisions),
    ) else {
        return Err(GameError::point_out_of_bounds(x, y));
    };
    Ok(GridIndex::new(row, col))
}

/// Returns the pixel center of a cell, where marks are drawn.
pub fn cell_center_of(index: GridIndex, board_size: f32, divisions: usize) -> (f32, f32) {
    let section_width = board_size / divisions as f32;
    (
        section_width / 2.0 + index.col() as f32 * section_width,
        section_width / 2.0 + index.row() as f32 * section_width,
    )
}
