//! Types that make up a player's board.

use std::fmt;

pub use self::{
    cell::Cell,
    coordinate::Coordinate,
    dimensions::{Dimensions, Direction},
    errors::BoardError,
};

mod cell;
mod coordinate;
mod dimensions;
mod errors;

/// A rectangular grid of [`Cell`]s, stored row-major.
///
/// Cloning a board always copies the cells, so a clone never shares storage with the
/// board it came from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Dimensions of this board.
    dim: Dimensions,
    /// Cells that make up this board.
    cells: Box<[Cell]>,
}

impl Board {
    /// Construct a board of the given [`Dimensions`] with every cell empty.
    pub fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size()).map(|_| Cell::Empty).collect();
        Self { dim, cells }
    }

    /// Build a board from rows of cells. Every row must have the same, nonzero length
    /// and there must be at least one row.
    pub fn from_rows<R, I>(rows: R) -> Result<Self, BoardError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = Cell>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            let before = cells.len();
            cells.extend(row);
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(BoardError::RaggedRow {
                        row: height,
                        expected,
                        found,
                    })
                }
                Some(_) => {}
            }
            height += 1;
        }
        let dim = Dimensions::try_new(height, width.unwrap_or(0)).ok_or(BoardError::Empty)?;
        Ok(Self {
            dim,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Get the [`Dimensions`] of this board.
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.dim.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.dim.cols()
    }

    /// Get the cell at the given [`Coordinate`]. Returns `None` if the coordinate is out
    /// of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.dim
            .try_linearize(coord)
            .and_then(|i| self.cells.get(i))
            .copied()
    }

    /// Overwrite the cell at the given [`Coordinate`], returning the previous contents.
    ///
    /// A [`Cell::Hit`] may only be written over a cell that is already part of a ship,
    /// so a hit can never appear where no ship was.
    pub fn set(&mut self, coord: Coordinate, cell: Cell) -> Result<Cell, BoardError> {
        let idx = self
            .dim
            .try_linearize(coord)
            .ok_or(BoardError::OutOfBounds { coord, dim: self.dim })?;
        let slot = &mut self.cells[idx];
        if cell == Cell::Hit && *slot == Cell::Empty {
            return Err(BoardError::HitOnEmpty(coord));
        }
        Ok(std::mem::replace(slot, cell))
    }

    /// Number of ship cells that have not been hit yet.
    pub fn ship_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_ship()).count()
    }

    /// Get an iterator over rows of this board. Each row is a slice of its cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dim.cols())
    }
}

impl fmt::Display for Board {
    /// Writes one line per row using the fleet symbols.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
