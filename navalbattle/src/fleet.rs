//! Fleet catalogs: the layouts players pick from when a match is set up.
//!
//! A catalog is plain text made of whitespace-separated tokens. Each fleet is a
//! `rows cols` pair followed by `rows` tokens of exactly `cols` symbols each: `.` is
//! open water and any other symbol is part of a ship. Touching cells with the same
//! symbol belong to the same ship. `*` is reserved for hits and may not appear.
//!
//! ```text
//! 3 4
//! AAA.
//! ....
//! B..C
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use thiserror::Error;

use crate::board::{Board, BoardError, Cell, Dimensions};

#[cfg(feature = "rng_gen")]
pub use self::random::{random_fleet, PlacementError, CLASSIC_SHIPS};

#[cfg(feature = "rng_gen")]
mod random;

/// Reason a fleet catalog could not be read. Fleets and rows are numbered from 1.
#[derive(Debug, Error)]
pub enum FleetError {
    /// The catalog file could not be read.
    #[error("could not read fleet catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A size token was not a number.
    #[error("fleet {fleet}: expected a board size, found {token:?}")]
    BadSize { fleet: usize, token: String },

    /// A fleet had zero rows or columns, or too many cells.
    #[error("fleet {fleet}: invalid board size {rows}x{cols}")]
    BadDimensions {
        fleet: usize,
        rows: usize,
        cols: usize,
    },

    /// The catalog ended in the middle of a fleet.
    #[error("fleet {fleet}: catalog ends before the fleet is complete")]
    Truncated { fleet: usize },

    /// A row had the wrong number of symbols.
    #[error("fleet {fleet}, row {row}: expected {expected} symbols, found {found}")]
    RowWidth {
        fleet: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A row used the reserved hit symbol.
    #[error("fleet {fleet}, row {row}: symbol {symbol:?} is reserved")]
    ReservedSymbol {
        fleet: usize,
        row: usize,
        symbol: char,
    },

    /// The parsed rows did not form a board.
    #[error("fleet {fleet}: {source}")]
    Board {
        fleet: usize,
        #[source]
        source: BoardError,
    },
}

/// An ordered list of fleets.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct FleetCatalog {
    fleets: Vec<Board>,
}

impl FleetCatalog {
    /// Read a catalog from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FleetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FleetError::Io {
            path: path.to_owned(),
            source,
        })?;
        let catalog = Self::parse(&text)?;
        debug!("loaded {} fleets from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a catalog from text.
    pub fn parse(text: &str) -> Result<Self, FleetError> {
        let mut tokens = text.split_whitespace();
        let mut fleets = Vec::new();
        while let Some(first) = tokens.next() {
            let fleet = fleets.len() + 1;
            let rows = parse_size(first, fleet)?;
            let cols = parse_size(tokens.next().ok_or(FleetError::Truncated { fleet })?, fleet)?;
            if Dimensions::try_new(rows, cols).is_none() {
                return Err(FleetError::BadDimensions { fleet, rows, cols });
            }
            let mut board_rows = Vec::new();
            for row in 1..=rows {
                let token = tokens.next().ok_or(FleetError::Truncated { fleet })?;
                let cells = token
                    .chars()
                    .map(|symbol| {
                        Cell::from_symbol(symbol)
                            .ok_or(FleetError::ReservedSymbol { fleet, row, symbol })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                if cells.len() != cols {
                    return Err(FleetError::RowWidth {
                        fleet,
                        row,
                        expected: cols,
                        found: cells.len(),
                    });
                }
                board_rows.push(cells);
            }
            let board =
                Board::from_rows(board_rows).map_err(|source| FleetError::Board { fleet, source })?;
            fleets.push(board);
        }
        Ok(Self { fleets })
    }

    /// Get the fleet with the given 1-based number.
    pub fn get(&self, number: usize) -> Option<&Board> {
        number.checked_sub(1).and_then(|i| self.fleets.get(i))
    }

    /// Number of fleets in the catalog.
    pub fn len(&self) -> usize {
        self.fleets.len()
    }

    /// True if the catalog has no fleets.
    pub fn is_empty(&self) -> bool {
        self.fleets.is_empty()
    }

    /// Write the catalog in the text format [`FleetCatalog::parse`] reads.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for fleet in self.fleets.iter() {
            out.push_str(&format!("{} {}\n{}", fleet.rows(), fleet.cols(), fleet));
        }
        out
    }
}

impl std::iter::FromIterator<Board> for FleetCatalog {
    fn from_iter<T: IntoIterator<Item = Board>>(iter: T) -> Self {
        Self {
            fleets: iter.into_iter().collect(),
        }
    }
}

fn parse_size(token: &str, fleet: usize) -> Result<usize, FleetError> {
    token.parse().map_err(|_| FleetError::BadSize {
        fleet,
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coordinate;

    #[test]
    fn parses_several_fleets() {
        let catalog = FleetCatalog::parse("2 3\nAA.\n..B\n\n1 1\nZ\n").unwrap();
        assert_eq!(catalog.len(), 2);
        let first = catalog.get(1).unwrap();
        assert_eq!((first.rows(), first.cols()), (2, 3));
        assert_eq!(first.get(Coordinate::new(1, 2)), Some(Cell::Ship('B')));
        assert_eq!(catalog.get(2).unwrap().to_string(), "Z\n");
        assert_eq!(catalog.get(0), None);
        assert_eq!(catalog.get(3), None);
    }

    #[test]
    fn empty_text_is_an_empty_catalog() {
        assert!(FleetCatalog::parse("  \n").unwrap().is_empty());
    }

    #[test]
    fn text_roundtrip() {
        let text = "2 2\nA.\n.B\n1 3\nCCC\n";
        let catalog = FleetCatalog::parse(text).unwrap();
        assert_eq!(catalog.to_text(), text);
    }

    #[test]
    fn reports_malformed_input() {
        assert!(matches!(
            FleetCatalog::parse("x 2"),
            Err(FleetError::BadSize { fleet: 1, .. })
        ));
        assert!(matches!(
            FleetCatalog::parse("0 2"),
            Err(FleetError::BadDimensions { fleet: 1, rows: 0, cols: 2 })
        ));
        assert!(matches!(
            FleetCatalog::parse("1 1 A 2 2 AA"),
            Err(FleetError::Truncated { fleet: 2 })
        ));
        assert!(matches!(
            FleetCatalog::parse("2 2 AA A.."),
            Err(FleetError::RowWidth {
                fleet: 1,
                row: 2,
                expected: 2,
                found: 3
            })
        ));
        assert!(matches!(
            FleetCatalog::parse("1 2 A*"),
            Err(FleetError::ReservedSymbol {
                fleet: 1,
                row: 1,
                symbol: '*'
            })
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = FleetCatalog::load("/nonexistent/fleets.txt").unwrap_err();
        assert!(matches!(err, FleetError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/fleets.txt"));
    }
}
