// dicesim/src/main.rs
//! dicesim entry point.
//!
//! Loads `.env`, parses the command line, sets up logging and dispatches to
//! the chosen command.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{LevelFilter, info};
use std::io;

use dicesim::cli::{Cli, Commands};
use dicesim::logger;
use dicesim::ui::theme::build_theme_map;
use dicesim::{RollOptions, run_interactive, run_roll};

fn main() -> Result<()> {
    // A missing .env file is the normal case.
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("dicesim started. Version: {}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }

    let theme_map = build_theme_map();
    let enable_colors = !cli.no_color && io::stdout().is_terminal();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Roll(cmd) => {
            let opts = RollOptions {
                config: cmd.config(),
                seed: cli.seed,
                json: cmd.json,
            };
            let stdout = io::stdout();
            run_roll(&mut stdout.lock(), &opts, &theme_map, enable_colors).context("Roll failed")?;
        }
        Commands::Interactive => {
            run_interactive(cli.seed, &theme_map, enable_colors).context("Interactive session failed")?;
        }
    }

    Ok(())
}
