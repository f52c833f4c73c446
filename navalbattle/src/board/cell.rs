use std::fmt;

/// Symbol used for an empty cell in fleet files and board output.
pub(crate) const EMPTY_SYMBOL: char = '.';
/// Symbol used for a hit cell in board output. Not allowed in fleet files.
pub(crate) const HIT_SYMBOL: char = '*';

/// A single cell of a player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Open water.
    Empty,
    /// Part of a ship that has not been hit yet. Carries the fleet symbol the ship was
    /// drawn with, which also tells touching ships apart.
    Ship(char),
    /// Part of a ship that has been hit.
    Hit,
}

impl Cell {
    /// Interpret a fleet symbol. Returns `None` for the reserved hit symbol and for
    /// whitespace.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            EMPTY_SYMBOL => Some(Cell::Empty),
            HIT_SYMBOL => None,
            c if c.is_whitespace() => None,
            c => Some(Cell::Ship(c)),
        }
    }

    /// The symbol this cell is drawn with.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Ship(c) => c,
            Cell::Hit => HIT_SYMBOL,
        }
    }

    /// True for a ship cell that has not been hit.
    pub fn is_ship(self) -> bool {
        matches!(self, Cell::Ship(_))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
