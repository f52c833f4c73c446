//! Points awarded for shots.

use crate::player::ShotOutcome;

/// Points per ship cell for a fresh hit.
pub const HIT_MULTIPLIER: i64 = 100;

/// Points per ship cell taken away for hitting a ship cell that was already hit.
pub const REPEAT_PENALTY: i64 = 30;

/// Score change for the player who fired a shot with the given outcome.
pub fn points(outcome: ShotOutcome) -> i64 {
    match outcome {
        ShotOutcome::Miss => 0,
        ShotOutcome::Hit { length } => i64::from(length) * HIT_MULTIPLIER,
        ShotOutcome::AlreadyHit { length } => -i64::from(length) * REPEAT_PENALTY,
    }
}
