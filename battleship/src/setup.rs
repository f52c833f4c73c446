//! Reads the players and their fleet choices before the match starts.

use std::io::BufRead;

use log::info;
use navalbattle::{fleet::FleetCatalog, Match, MatchSetup};

use crate::{errors::AppError, input::InputReader};

/// Read the player count, then a name line and a 1-based fleet number line per player.
pub fn read_match<B: BufRead>(
    input: &mut InputReader<B>,
    catalog: &FleetCatalog,
) -> Result<Match, AppError> {
    let line = input.next_nonblank_line()?.ok_or(AppError::UnexpectedEof)?;
    let count: usize = line
        .parse()
        .map_err(|_| AppError::BadPlayerCount(line.to_owned()))?;

    let mut setup = MatchSetup::new();
    for _ in 0..count {
        let name = input
            .next_line()?
            .ok_or(AppError::UnexpectedEof)?
            .to_owned();
        let line = input.next_nonblank_line()?.ok_or(AppError::UnexpectedEof)?;
        let number: usize = line.parse().map_err(|_| AppError::BadFleetNumber {
            player: name.clone(),
            input: line.to_owned(),
        })?;
        let fleet = catalog.get(number).ok_or_else(|| AppError::UnknownFleet {
            player: name.clone(),
            number,
            available: catalog.len(),
        })?;
        setup.add_player(name, fleet)?;
    }
    info!("starting a match with {} players", setup.len());
    setup.start().map_err(|_| AppError::NoPlayers)
}
