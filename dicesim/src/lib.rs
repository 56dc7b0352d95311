// dicesim/src/lib.rs
//! # dicesim CLI Application
//!
//! This crate provides the terminal interface for the dicesim core library:
//! the interactive menu, the scripted `roll` command, and all text rendering.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::interactive::run_interactive;
pub use commands::roll::{run_roll, RollOptions};
