//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::board::{Coordinate, Dimensions};

/// Reason a board could not be built or modified.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BoardError {
    /// The board would have no rows or no columns.
    #[error("a board needs at least one row and one column")]
    Empty,

    /// A row had a different length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The coordinate is not on the board.
    #[error("{coord} is out of bounds for a {}x{} board", .dim.rows(), .dim.cols())]
    OutOfBounds { coord: Coordinate, dim: Dimensions },

    /// A hit was written over open water.
    #[error("cannot mark {0} as hit: no ship there")]
    HitOnEmpty(Coordinate),
}
