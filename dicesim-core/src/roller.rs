// dicesim-core/src/roller.rs
//! Roll generator.
//!
//! Every function takes the randomness source as a parameter so callers can
//! use a thread RNG in production and a seeded `StdRng` in tests.

use log::debug;
use rand::Rng;

use crate::errors::{DiceError, Result};

/// A single die outcome, always in `1..=sides`.
pub type DieRoll = u32;

/// The outcomes of rolling `dice_count` dice together once.
pub type RollSet = Vec<DieRoll>;

/// Rolls one die with `sides` faces.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R, sides: u32) -> Result<DieRoll> {
    if sides < 1 {
        return Err(DiceError::InvalidSides(sides));
    }
    Ok(rng.random_range(1..=sides))
}

/// Rolls `dice_count` dice. Zero dice yields an empty set.
pub fn roll_set<R: Rng + ?Sized>(rng: &mut R, dice_count: usize, sides: u32) -> Result<RollSet> {
    if sides < 1 {
        return Err(DiceError::InvalidSides(sides));
    }
    (0..dice_count).map(|_| roll_die(rng, sides)).collect()
}

/// Produces `num_sets` independent roll sets.
pub fn roll_many<R: Rng + ?Sized>(
    rng: &mut R,
    dice_count: usize,
    sides: u32,
    num_sets: usize,
) -> Result<Vec<RollSet>> {
    if sides < 1 {
        return Err(DiceError::InvalidSides(sides));
    }
    let sets = (0..num_sets)
        .map(|_| roll_set(rng, dice_count, sides))
        .collect::<Result<Vec<_>>>()?;
    debug!("Rolled {}d{} {} time(s).", dice_count, sides, num_sets);
    Ok(sets)
}
