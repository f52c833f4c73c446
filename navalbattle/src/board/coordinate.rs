use std::{convert::TryFrom, fmt};

/// The 0-based position of a cell on a [`Board`][crate::board::Board].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Row of the cell, counted from the top.
    pub row: usize,
    /// Column of the cell, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given 0-based `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert the 1-based `row` and `col` used by players into a [`Coordinate`].
    /// Returns `None` if either is below 1. Does not check any upper bound.
    pub fn from_one_based(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row.checked_sub(1)?).ok()?;
        let col = usize::try_from(col.checked_sub(1)?).ok()?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Coordinate {
    /// Shows the coordinate the way players type it, 1-based.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_conversion() {
        assert_eq!(Coordinate::from_one_based(1, 1), Some(Coordinate::new(0, 0)));
        assert_eq!(Coordinate::from_one_based(5, 3), Some(Coordinate::new(4, 2)));
        assert_eq!(Coordinate::from_one_based(0, 3), None);
        assert_eq!(Coordinate::from_one_based(3, 0), None);
        assert_eq!(Coordinate::from_one_based(-2, 3), None);
        assert_eq!(Coordinate::from_one_based(i64::MIN, 1), None);
        assert_eq!(Coordinate::new(4, 2).to_string(), "(5, 3)");
    }
}
