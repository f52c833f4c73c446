//! Random fleet layouts.

use rand::Rng;
use thiserror::Error;

use crate::board::{Board, BoardError, Cell, Coordinate, Dimensions, Direction};

/// Ship lengths of the classic game: carrier, battleship, cruiser, submarine and
/// destroyer.
pub const CLASSIC_SHIPS: [usize; 5] = [5, 4, 3, 3, 2];

/// Placement attempts per ship before giving up.
const MAX_ATTEMPTS: usize = 100;

/// Reason a random fleet could not be generated.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// Each ship gets its own letter, so there can be at most 26.
    #[error("at most 26 ships can be placed, got {0}")]
    TooManyShips(usize),

    /// A ship of length zero was requested.
    #[error("ship {index} has length zero")]
    ZeroLength { index: usize },

    /// No free straight run was found for a ship.
    #[error("no room for ship {index} of length {length}")]
    NoSpace { index: usize, length: usize },

    /// A chosen cell could not be written to the board.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Generate a fleet of straight, non-overlapping ships with the given lengths. Ship
/// `i` is drawn with the `i`th capital letter, so touching ships stay distinct.
pub fn random_fleet<R: Rng>(
    rng: &mut R,
    dim: Dimensions,
    lengths: &[usize],
) -> Result<Board, PlacementError> {
    if lengths.len() > 26 {
        return Err(PlacementError::TooManyShips(lengths.len()));
    }
    let mut board = Board::new(dim);
    for (index, &length) in lengths.iter().enumerate() {
        if length == 0 {
            return Err(PlacementError::ZeroLength { index });
        }
        let symbol = (b'A' + index as u8) as char;
        let placement = (0..MAX_ATTEMPTS)
            .find_map(|_| try_place(rng, &board, length))
            .ok_or(PlacementError::NoSpace { index, length })?;
        for coord in placement {
            board.set(coord, Cell::Ship(symbol))?;
        }
    }
    Ok(board)
}

/// Pick a random start and orientation and return the ship's cells if they are all on
/// the board and free.
fn try_place<R: Rng>(rng: &mut R, board: &Board, length: usize) -> Option<Vec<Coordinate>> {
    let dim = board.dimensions();
    let dir = if rng.gen() {
        Direction::Right
    } else {
        Direction::Down
    };
    let start = Coordinate::new(rng.gen_range(0, dim.rows()), rng.gen_range(0, dim.cols()));
    let cells: Vec<_> = std::iter::once(start)
        .chain(dir.walk(start, dim))
        .take(length)
        .collect();
    if cells.len() == length && cells.iter().all(|&c| board.get(c) == Some(Cell::Empty)) {
        Some(cells)
    } else {
        None
    }
}
