//! A player: a named fleet, the damage it has taken, and the player's score.

use crate::board::{Board, BoardError, Coordinate};

mod resolver;

/// Result of a shot that landed on a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot hit open water.
    Miss,
    /// The shot hit a ship cell that had not been hit before. `length` is the size of
    /// the straight run of that ship through the impact cell, which is now all hit.
    Hit { length: u32 },
    /// The shot hit a ship cell that had already been hit. `length` is the size of the
    /// run the cell belongs to. The board was not changed.
    AlreadyHit { length: u32 },
}

/// A participant in a [`Match`][crate::game::Match].
///
/// A player keeps two boards: the fleet as it was laid out, which never changes, and
/// the live board that records hits. Elimination only sets a flag, so the fleet and
/// score stay available after a player is out.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    score: i64,
    eliminated: bool,
    /// Fleet as it was placed. Used to work out ship extents.
    original: Board,
    /// Fleet with the hits taken so far.
    live: Board,
}

impl Player {
    /// Create a player with the given name, seeded with a copy of `fleet`.
    pub fn new(name: impl Into<String>, fleet: &Board) -> Self {
        Self {
            name: name.into(),
            score: 0,
            eliminated: false,
            original: fleet.clone(),
            live: fleet.clone(),
        }
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's current score. May be negative.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Add `delta` to the score.
    pub fn adjust_score(&mut self, delta: i64) {
        self.score += delta;
    }

    /// Whether the player has been eliminated.
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Mark the player as eliminated. There is no way back.
    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }

    /// The live board, with hits shown.
    pub fn board(&self) -> &Board {
        &self.live
    }

    /// The fleet as originally placed.
    pub fn fleet(&self) -> &Board {
        &self.original
    }

    /// Number of rows on the player's board.
    pub fn max_row(&self) -> usize {
        self.live.rows()
    }

    /// Number of columns on the player's board.
    pub fn max_col(&self) -> usize {
        self.live.cols()
    }

    /// True once no unhit ship cell is left on the live board.
    pub fn ships_sunk(&self) -> bool {
        self.live.ship_cells() == 0
    }

    /// Take a shot at the 0-based `coord` of this player's board.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        resolver::resolve(&self.original, &mut self.live, coord)
    }
}
