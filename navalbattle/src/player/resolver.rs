//! Works out what a shot hit.
//!
//! The live board decides whether the impact cell is fresh or already hit. The extent
//! of the ship is always measured on the original board, so cells hit on earlier turns
//! still count towards the run they belong to.

use log::trace;

use crate::{
    board::{Board, BoardError, Cell, Coordinate, Direction},
    player::ShotOutcome,
};

/// Resolve a shot at `impact`, marking the struck run as hit on `live` if the impact
/// cell was a fresh ship cell.
pub(super) fn resolve(
    original: &Board,
    live: &mut Board,
    impact: Coordinate,
) -> Result<ShotOutcome, BoardError> {
    let cell = live.get(impact).ok_or(BoardError::OutOfBounds {
        coord: impact,
        dim: live.dimensions(),
    })?;
    let outcome = match cell {
        Cell::Empty => ShotOutcome::Miss,
        Cell::Ship(_) => {
            let run = ship_run(original, impact);
            for &coord in run.iter() {
                live.set(coord, Cell::Hit)?;
            }
            ShotOutcome::Hit {
                length: run.len() as u32,
            }
        }
        Cell::Hit => ShotOutcome::AlreadyHit {
            length: ship_run(original, impact).len() as u32,
        },
    };
    trace!("shot at {} resolved to {:?}", impact, outcome);
    Ok(outcome)
}

/// Collect `impact` and every cell reachable from it in a straight line, in any of the
/// four directions, that holds the same cell as `impact` on the original board.
fn ship_run(original: &Board, impact: Coordinate) -> Vec<Coordinate> {
    let dim = original.dimensions();
    let target = original.get(impact);
    let mut run = vec![impact];
    for dir in Direction::ALL.iter() {
        run.extend(
            dir.walk(impact, dim)
                .take_while(|&coord| original.get(coord) == target),
        );
    }
    run
}
