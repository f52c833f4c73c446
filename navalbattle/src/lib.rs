//! Multiplayer, turn-based Battleship.
//!
//! Every player owns a board seeded from a fleet layout. Players take turns firing at
//! the boards of their opponents: fresh hits on a ship award points for the whole
//! straight run of that ship through the impact cell, repeated hits cost points, and a
//! player whose ships are all hit is eliminated. The match ends when one player is
//! left standing.
//!
//! The crate is organized leaf-first:
//!
//! - [`board`] holds the grid of [`Cell`][board::Cell]s and its geometry.
//! - [`player`] pairs the immutable fleet with the live board and resolves shots.
//! - [`game`] runs the turn order, scoring, elimination and winner selection.
//! - [`fleet`] reads fleet catalogs and, with the `rng_gen` feature, generates random
//!   fleets.

pub mod board;
pub mod fleet;
pub mod game;
pub mod player;

pub use crate::{
    board::{Board, Cell, Coordinate, Dimensions},
    game::{Match, MatchSetup, ShotReport},
    player::{Player, ShotOutcome},
};
