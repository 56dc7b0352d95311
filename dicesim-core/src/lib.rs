// dicesim-core/src/lib.rs
//! # dicesim Core Library
//!
//! `dicesim-core` provides the platform-independent logic behind the dicesim
//! CLI: generating dice rolls from an injected randomness source, summarizing
//! a history of rolls, and judging that history against the theoretical
//! expectation for the dice used.
//!
//! The library performs no I/O. Callers own their [`RollSession`] and pass a
//! random number generator into every roll, which keeps the engine trivially
//! testable with a seeded `StdRng`.
//!
//! ## Modules
//!
//! * `roller`: `roll_die`, `roll_set` and `roll_many`.
//! * `statistics`: [`Statistics`] snapshots and the `sum` helper.
//! * `analysis`: [`analyze`] and its structured [`Verdict`].
//! * `session`: [`RollHistory`] and the caller-owned [`RollSession`].
//! * `config`: [`DiceConfig`], shell bounds and the [`DieType`] menu.
//! * `errors`: the [`DiceError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use dicesim_core::{analyze, roll_many, Verdict};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let history = roll_many(&mut rng, 2, 6, 10).unwrap();
//!
//! let analysis = analyze(&history, 2, 6).unwrap().expect("history is not empty");
//! assert_eq!(analysis.expected_average, 7.0);
//! assert!(matches!(analysis.verdict, Verdict::Series { .. }));
//! ```

pub mod analysis;
pub mod config;
pub mod errors;
pub mod roller;
pub mod session;
pub mod statistics;

pub use analysis::{analyze, expected_average, Analysis, AverageOutcome, RollOutcome, Spread, Verdict};
pub use config::{DiceConfig, DieType, MAX_DICE, MAX_ROLLS, MIN_DICE, MIN_ROLLS};
pub use errors::DiceError;
pub use roller::{roll_die, roll_many, roll_set, DieRoll, RollSet};
pub use session::{RollHistory, RollSession};
pub use statistics::{sum, Statistics};
