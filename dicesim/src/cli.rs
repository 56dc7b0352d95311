// dicesim/src/cli.rs
//! Command-line interface definition for dicesim.
//!
//! Every dice parameter can also come from the environment (`DICESIM_*`),
//! which `main` pre-populates from a `.env` file when one exists.

use clap::{Args, Parser, Subcommand};
use dicesim_core::{DiceConfig, MAX_DICE, MAX_ROLLS};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "dicesim",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Roll dice and compare your luck with the odds",
    long_about = "dicesim rolls any number of dice, keeps a history of the results for the session, and reports totals, extremes, standard deviation and how your rolls compare with the expected average. Run it without a subcommand for the interactive menu, or use `roll` for a single scripted batch."
)]
pub struct Cli {
    /// Disable all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Force debug logging, overriding RUST_LOG.
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Never emit ANSI colors, even on a terminal.
    #[arg(long = "no-color", global = true, help = "Disable colored output.")]
    pub no_color: bool,

    /// Seed for the random number generator, for reproducible rolls.
    #[arg(long, env = "DICESIM_SEED", global = true, value_name = "SEED", help = "Seed the dice for reproducible results.")]
    pub seed: Option<u64>,

    /// The subcommand to run; defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// All available commands for the `dicesim` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rolls one batch of dice and prints the results.
    #[command(about = "Roll one batch of dice and print results, statistics and analysis.")]
    Roll(RollCommand),

    /// Starts the interactive menu.
    #[command(about = "Start the interactive dice rolling menu (default).")]
    Interactive,
}

/// Arguments for the `roll` command.
#[derive(Args, Debug)]
pub struct RollCommand {
    /// Number of dice rolled together.
    #[arg(
        long,
        short = 'n',
        env = "DICESIM_DICE",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=MAX_DICE as i64),
        help = "Number of dice per roll (1-20)."
    )]
    pub dice: u32,

    /// Faces on each die.
    #[arg(
        long,
        short = 's',
        env = "DICESIM_SIDES",
        default_value_t = 6,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Number of sides per die."
    )]
    pub sides: u32,

    /// How many times to roll the dice.
    #[arg(
        long,
        short = 'r',
        env = "DICESIM_ROLLS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=MAX_ROLLS as i64),
        help = "Number of rolls (1-100)."
    )]
    pub rolls: u32,

    /// Print a JSON document instead of tables.
    #[arg(long, help = "Print the rolls, statistics and analysis as JSON on stdout.")]
    pub json: bool,
}

impl RollCommand {
    pub fn config(&self) -> DiceConfig {
        DiceConfig::new(self.dice as usize, self.sides, self.rolls as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["dicesim"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn roll_arguments_become_a_config() {
        let cli = Cli::try_parse_from(["dicesim", "roll", "-n", "3", "-s", "8", "-r", "12", "--seed", "4"]).unwrap();
        assert_eq!(cli.seed, Some(4));
        match cli.command {
            Some(Commands::Roll(cmd)) => assert_eq!(cmd.config(), DiceConfig::new(3, 8, 12)),
            other => panic!("expected roll command, got {:?}", other),
        }
    }

    #[test]
    fn out_of_range_counts_are_rejected() {
        assert!(Cli::try_parse_from(["dicesim", "roll", "--dice", "21"]).is_err());
        assert!(Cli::try_parse_from(["dicesim", "roll", "--dice", "0"]).is_err());
        assert!(Cli::try_parse_from(["dicesim", "roll", "--sides", "0"]).is_err());
        assert!(Cli::try_parse_from(["dicesim", "roll", "--rolls", "101"]).is_err());
    }
}
