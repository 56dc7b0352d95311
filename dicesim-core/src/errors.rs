//! errors.rs - Custom error types for the dicesim-core library.
//!
//! This module defines a structured error enum for the library. Every
//! precondition the roll generator, analysis engine or configuration checks
//! is reported through one of these variants; nothing is clamped silently.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `dicesim-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiceError {
    #[error("A die needs at least one side, got {0}")]
    InvalidSides(u32),

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, DiceError>;
