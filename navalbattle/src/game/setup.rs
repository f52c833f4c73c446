//! Builder for a [`Match`].

use std::collections::{hash_map::Entry, HashMap};

use log::debug;

use crate::{
    board::Board,
    game::{AddPlayerError, Match},
    player::Player,
};

/// Handles setup for the match. Acts as a builder for [`Match`].
#[derive(Debug, Default)]
pub struct MatchSetup {
    /// Players in turn order.
    players: Vec<Player>,

    /// Index into `players` by name.
    by_name: HashMap<String, usize>,
}

impl MatchSetup {
    /// Construct a new [`MatchSetup`] with no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player with the given name, seeded with a copy of `fleet`. Players take
    /// their first turns in the order they were added. Names are compared
    /// case-sensitively and must be unique.
    pub fn add_player(
        &mut self,
        name: impl Into<String>,
        fleet: &Board,
    ) -> Result<&Player, AddPlayerError> {
        let name = name.into();
        match self.by_name.entry(name.clone()) {
            Entry::Occupied(_) => Err(AddPlayerError::new(name)),
            Entry::Vacant(entry) => {
                debug!(
                    "adding player {:?} with a {}x{} fleet",
                    name,
                    fleet.rows(),
                    fleet.cols()
                );
                entry.insert(self.players.len());
                self.players.push(Player::new(name, fleet));
                Ok(&self.players[self.players.len() - 1])
            }
        }
    }

    /// Number of players added so far.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if no players were added yet.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns true if the match can start, i.e. at least one player was added.
    pub fn ready(&self) -> bool {
        !self.players.is_empty()
    }

    /// Tries to start the match. If no player has been added, returns `self`.
    pub fn start(self) -> Result<Match, Self> {
        if !self.ready() {
            Err(self)
        } else {
            Ok(Match::new(self.players, self.by_name))
        }
    }
}
