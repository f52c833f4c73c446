use crate::board::Coordinate;

/// Size of a rectangular board. Both sides are at least 1.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Number of rows. This cooresponds to [`Coordinate::row`].
    rows: usize,
    /// Number of columns. This cooresponds to [`Coordinate::col`].
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Panics if `rows * cols` exceeds `usize::max_value()` or if either side is 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None => {
                if rows == 0 || cols == 0 {
                    panic!("Dimensions must be nonzero, got {}x{}", rows, cols);
                } else {
                    panic!(
                        "Dimensions too large: {} * {} > {}",
                        rows,
                        cols,
                        usize::max_value()
                    );
                }
            }
        }
    }

    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Returns `None` if `rows * cols` exceeds `usize::max_value()` or if either side
    /// is 0.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            None
        } else {
            rows.checked_mul(cols).map(|_| Self { rows, cols })
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the given [`Coordinate`] lies on the board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Get an iterator over rows of the grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols;
        (0..self.rows).map(move |row| (0..cols).map(move |col| Coordinate { row, col }))
    }
}

impl Default for Dimensions {
    /// The classic 10x10 board.
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}

/// One of the four cardinal directions on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the hit resolver scans them.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The neighbor of `coord` one step in this direction, or `None` if that step
    /// leaves the board. Boards never wrap.
    pub fn step(self, coord: Coordinate, dim: Dimensions) -> Option<Coordinate> {
        let next = match self {
            Direction::Up => Coordinate::new(coord.row.checked_sub(1)?, coord.col),
            Direction::Down => Coordinate::new(coord.row.checked_add(1)?, coord.col),
            Direction::Left => Coordinate::new(coord.row, coord.col.checked_sub(1)?),
            Direction::Right => Coordinate::new(coord.row, coord.col.checked_add(1)?),
        };
        if dim.contains(next) {
            Some(next)
        } else {
            None
        }
    }

    /// Iterate the coordinates reached by repeatedly stepping in this direction from
    /// `start`, not including `start` itself.
    pub fn walk(self, start: Coordinate, dim: Dimensions) -> impl Iterator<Item = Coordinate> {
        std::iter::successors(self.step(start, dim), move |&coord| self.step(coord, dim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_zero_and_overflow() {
        assert_eq!(Dimensions::try_new(0, 4), None);
        assert_eq!(Dimensions::try_new(4, 0), None);
        assert_eq!(Dimensions::try_new(usize::max_value(), 2), None);
        let dim = Dimensions::try_new(2, 3).unwrap();
        assert_eq!(dim.total_size(), 6);
    }

    #[test]
    fn linearize_row_major() {
        let dim = Dimensions::new(3, 4);
        for (i, coord) in dim.iter_coordinates().flatten().enumerate() {
            assert_eq!(dim.try_linearize(coord), Some(i));
        }
        assert_eq!(dim.try_linearize(Coordinate::new(3, 0)), None);
        assert_eq!(dim.try_linearize(Coordinate::new(0, 4)), None);
    }

    #[test]
    fn step_stops_at_edges() {
        let dim = Dimensions::new(2, 2);
        let corner = Coordinate::new(0, 0);
        assert_eq!(Direction::Up.step(corner, dim), None);
        assert_eq!(Direction::Left.step(corner, dim), None);
        assert_eq!(Direction::Down.step(corner, dim), Some(Coordinate::new(1, 0)));
        assert_eq!(Direction::Right.step(corner, dim), Some(Coordinate::new(0, 1)));
        assert_eq!(Direction::Right.step(Coordinate::new(0, 1), dim), None);
    }

    #[test]
    fn walk_covers_the_rest_of_the_line() {
        let dim = Dimensions::new(1, 5);
        let cells: Vec<_> = Direction::Right.walk(Coordinate::new(0, 1), dim).collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(0, 2),
                Coordinate::new(0, 3),
                Coordinate::new(0, 4)
            ]
        );
        assert_eq!(Direction::Left.walk(Coordinate::new(0, 0), dim).count(), 0);
    }
}
