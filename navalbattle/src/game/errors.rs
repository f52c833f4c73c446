use std::fmt;

use thiserror::Error;

/// Error returned when adding a player whose name is already taken.
#[derive(Error)]
#[error("player with name {name:?} already exists")]
pub struct AddPlayerError {
    /// Name of the player that was attempted to be added.
    name: String,
}

impl AddPlayerError {
    /// Create an [`AddPlayerError`] for the player with the given name.
    pub(super) fn new(name: String) -> Self {
        Self { name }
    }

    /// The name that was already in use.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for AddPlayerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Error returned when looking up a player that is not in the match.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("no player named {0:?}")]
pub struct UnknownPlayer(pub String);

/// Reason why a shot could not be fired. Variants are listed in the order they are
/// checked.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The match is already over.
    #[error("the game is already over")]
    AlreadyOver,

    /// No player has the target name.
    #[error("there is no player with that name")]
    UnknownPlayer,

    /// The target player was already eliminated.
    #[error("the target player was already eliminated")]
    AlreadyEliminated,

    /// The target is the player whose turn it is.
    #[error("players cannot shoot at their own fleet")]
    SelfShot,

    /// The coordinate is outside the target's board.
    #[error("the target coordinate is out of bounds")]
    OutOfBounds,
}

/// Error returned when a shot is refused.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("could not shoot ({row}, {col}) on {target:?}: {reason}")]
pub struct ShotError {
    /// Reason the shot was refused.
    reason: CannotShootReason,
    /// Name of the player that was targeted.
    target: String,
    /// 1-based row as given.
    row: i64,
    /// 1-based column as given.
    col: i64,
}

impl ShotError {
    pub(super) fn new(reason: CannotShootReason, target: &str, row: i64, col: i64) -> Self {
        Self {
            reason,
            target: target.to_owned(),
            row,
            col,
        }
    }

    /// Get the reason the shot was refused.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Name of the targeted player.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The 1-based `(row, col)` that was targeted.
    pub fn position(&self) -> (i64, i64) {
        (self.row, self.col)
    }
}
