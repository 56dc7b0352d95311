// dicesim-core/src/config.rs
//! Dice configuration shared between the core and any shell built on it.
//!
//! `DiceConfig` carries the three parameters a caller supplies per batch of
//! rolls. The bounds here are the conventional limits of the interactive
//! shell; the generator itself only requires `sides >= 1`.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{DiceError, Result};

pub const MIN_DICE: usize = 1;
pub const MAX_DICE: usize = 20;
pub const MIN_ROLLS: usize = 1;
pub const MAX_ROLLS: usize = 100;

/// Parameters for one batch of rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceConfig {
    /// Dice rolled together per roll set.
    pub dice_count: usize,
    /// Faces on every die.
    pub sides: u32,
    /// Number of roll sets to generate.
    pub roll_count: usize,
}

impl Default for DiceConfig {
    fn default() -> Self {
        DiceConfig {
            dice_count: 1,
            sides: DieType::D6.sides(),
            roll_count: 1,
        }
    }
}

impl DiceConfig {
    pub fn new(dice_count: usize, sides: u32, roll_count: usize) -> Self {
        DiceConfig { dice_count, sides, roll_count }
    }

    /// Checks the configuration against the shell bounds.
    ///
    /// Returns the first violation found; values are never adjusted.
    pub fn validate(&self) -> Result<()> {
        check_range("dice count", self.dice_count, MIN_DICE, MAX_DICE)?;
        if self.sides < 1 {
            return Err(DiceError::InvalidSides(self.sides));
        }
        check_range("roll count", self.roll_count, MIN_ROLLS, MAX_ROLLS)?;
        debug!("Configuration {} validated.", self);
        Ok(())
    }
}

impl fmt::Display for DiceConfig {
    /// Standard dice notation, e.g. `3d6 x10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{} x{}", self.dice_count, self.sides, self.roll_count)
    }
}

fn check_range(name: &'static str, value: usize, min: usize, max: usize) -> Result<()> {
    if value < min || value > max {
        return Err(DiceError::OutOfRange { name, value, min, max });
    }
    Ok(())
}

/// The die types offered by the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieType {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieType {
    /// Menu order; position `i` is selected by the choice `i + 1`.
    pub const ALL: [DieType; 7] = [
        DieType::D4,
        DieType::D6,
        DieType::D8,
        DieType::D10,
        DieType::D12,
        DieType::D20,
        DieType::D100,
    ];

    pub fn sides(self) -> u32 {
        match self {
            DieType::D4 => 4,
            DieType::D6 => 6,
            DieType::D8 => 8,
            DieType::D10 => 10,
            DieType::D12 => 12,
            DieType::D20 => 20,
            DieType::D100 => 100,
        }
    }

    pub fn label(self) -> String {
        format!("D{}", self.sides())
    }

    /// Maps a one-based menu answer ("1" through "7") to a die type.
    pub fn from_menu_choice(choice: &str) -> Option<DieType> {
        let index: usize = choice.trim().parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| DieType::ALL.get(i).copied())
    }
}
