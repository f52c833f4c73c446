use std::io;

use navalbattle::{
    fleet::{FleetError, PlacementError},
    game::AddPlayerError,
};
use thiserror::Error;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("could not generate fleets: {0}")]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    AddPlayer(#[from] AddPlayerError),

    /// Input ended before every player was set up.
    #[error("input ended during match setup")]
    UnexpectedEof,

    #[error("expected the number of players, found {0:?}")]
    BadPlayerCount(String),

    #[error("a match needs at least one player")]
    NoPlayers,

    #[error("player {player:?}: expected a fleet number, found {input:?}")]
    BadFleetNumber { player: String, input: String },

    #[error("player {player:?}: there is no fleet {number}, the catalog has {available}")]
    UnknownFleet {
        player: String,
        number: usize,
        available: usize,
    },
}
