//! The interactive menu.
//!
//! `InteractiveShell` owns the session for the lifetime of the menu and is
//! generic over its input, output and RNG so it can be driven from tests with
//! in-memory buffers and a seeded generator.

use anyhow::{Context, Result};
use dicesim_core::{DiceConfig, DieType, RollSession, MAX_DICE, MAX_ROLLS, MIN_DICE, MIN_ROLLS};
use log::{debug, info, warn};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use crate::commands::make_rng;
use crate::ui::output_format::{
    paint, print_error_message, print_info_message, print_section_header, print_success_message,
    print_warn_message,
};
use crate::ui::report::print_report;
use crate::ui::roll_table::print_rolls;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// `Break` means the input was closed and the menu should end.
type Step = ControlFlow<()>;

pub struct InteractiveShell<'t, R, W, G> {
    input: R,
    output: W,
    rng: G,
    session: RollSession,
    theme: &'t ThemeMap,
    enable_colors: bool,
}

impl<'t, R: BufRead, W: Write, G: Rng> InteractiveShell<'t, R, W, G> {
    pub fn new(input: R, output: W, rng: G, theme: &'t ThemeMap, enable_colors: bool) -> Self {
        InteractiveShell {
            input,
            output,
            rng,
            session: RollSession::new(),
            theme,
            enable_colors,
        }
    }

    pub fn session(&self) -> &RollSession {
        &self.session
    }

    /// Runs the menu until the user exits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive session.");
        print_section_header(&mut self.output, "🎲 DICE ROLLING SIMULATOR 🎲", self.theme, self.enable_colors)?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("\nSelect an option (1-4): ")? else {
                break;
            };
            let step = match choice.as_str() {
                "1" => self.roll_dice()?,
                "2" => self.view_results()?,
                "3" => self.clear_all()?,
                "4" => ControlFlow::Break(()),
                other => {
                    debug!("Unknown menu option {:?}.", other);
                    self.error("Invalid option. Please select 1-4.")?;
                    ControlFlow::Continue(())
                }
            };
            if step.is_break() {
                break;
            }
        }

        writeln!(self.output)?;
        self.info("Thanks for using the Dice Rolling Simulator! Goodbye!")?;
        info!("Interactive session ended with {} roll set(s).", self.session.history().len());
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nOptions:")?;
        writeln!(self.output, "1. Roll Dice")?;
        writeln!(self.output, "2. View Results")?;
        writeln!(self.output, "3. Clear All")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    fn roll_dice(&mut self) -> Result<Step> {
        writeln!(self.output, "\n--- Configuration ---")?;

        let prompt = format!("Number of dice ({}-{}): ", MIN_DICE, MAX_DICE);
        let Some(dice_count) = self.prompt_number(&prompt, MIN_DICE, Some(MAX_DICE))? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(sides) = self.choose_sides()? else {
            return Ok(ControlFlow::Break(()));
        };
        let prompt = format!("Number of rolls ({}-{}): ", MIN_ROLLS, MAX_ROLLS);
        let Some(roll_count) = self.prompt_number(&prompt, MIN_ROLLS, Some(MAX_ROLLS))? else {
            return Ok(ControlFlow::Break(()));
        };

        let config = DiceConfig::new(dice_count, sides, roll_count);
        config.validate()?;
        writeln!(self.output, "\nRolling {}d{} {} time(s)...", dice_count, sides, roll_count)?;

        let first_index = self.session.history().len() + 1;
        self.session.roll(&mut self.rng, config)?;
        let new_sets = &self.session.history().as_slice()[first_index - 1..];
        print_rolls(&mut self.output, new_sets, first_index, self.theme, self.enable_colors)?;
        self.print_session_report()?;
        Ok(ControlFlow::Continue(()))
    }

    fn view_results(&mut self) -> Result<Step> {
        if self.session.history().is_empty() {
            writeln!(self.output)?;
            self.info("No rolls to display yet. Roll some dice first!")?;
            return Ok(ControlFlow::Continue(()));
        }
        print_rolls(&mut self.output, self.session.history().as_slice(), 1, self.theme, self.enable_colors)?;
        self.print_session_report()?;
        Ok(ControlFlow::Continue(()))
    }

    fn clear_all(&mut self) -> Result<Step> {
        if self.session.history().is_empty() {
            writeln!(self.output)?;
            self.info("Nothing to clear.")?;
            return Ok(ControlFlow::Continue(()));
        }
        let Some(answer) = self.prompt("Are you sure you want to clear all rolls? (y/n): ")? else {
            return Ok(ControlFlow::Break(()));
        };
        if answer.eq_ignore_ascii_case("y") {
            self.session.clear();
            print_success_message(&mut self.output, "✓ All rolls cleared.", self.theme, self.enable_colors)?;
        } else {
            self.info("Clear cancelled.")?;
        }
        Ok(ControlFlow::Continue(()))
    }

    fn print_session_report(&mut self) -> Result<()> {
        if let Some(analysis) = self.session.analyze()? {
            print_report(&mut self.output, &analysis, self.theme, self.enable_colors)?;
        }
        Ok(())
    }

    /// Shows the die menu. Unknown answers fall back to a D6.
    fn choose_sides(&mut self) -> Result<Option<u32>> {
        writeln!(self.output, "\nDice Types:")?;
        for (index, die) in DieType::ALL.iter().enumerate() {
            let name = format!("{}-sided", die.sides());
            writeln!(self.output, "{}) {:<8} ({})", index + 1, name, die.label())?;
        }

        let prompt = format!("Select dice type (1-{}): ", DieType::ALL.len());
        let Some(choice) = self.prompt(&prompt)? else {
            return Ok(None);
        };
        let die = match DieType::from_menu_choice(&choice) {
            Some(die) => die,
            None => {
                warn!("Unknown die choice {:?}, falling back to D6.", choice);
                print_warn_message(&mut self.output, "Invalid choice. Using D6.", self.theme, self.enable_colors)?;
                DieType::D6
            }
        };
        Ok(Some(die.sides()))
    }

    /// Asks until the answer is an integer within bounds. `None` on end of input.
    fn prompt_number(&mut self, text: &str, min: usize, max: Option<usize>) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match answer.parse::<i64>() {
                Ok(value) if value < min as i64 => {
                    self.error(&format!("Please enter a number >= {}", min))?;
                }
                Ok(value) if max.is_some_and(|max| value > max as i64) => {
                    self.error(&format!("Please enter a number <= {}", max.unwrap_or_default()))?;
                }
                Ok(value) => return Ok(Some(value as usize)),
                Err(_) => self.error("Please enter a valid number.")?,
            }
        }
    }

    /// Writes `text` and reads one trimmed line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", paint(text, ThemeEntry::Prompt, self.theme, self.enable_colors))?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read user input")?;
        if read == 0 {
            debug!("Input closed while waiting for an answer.");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn info(&mut self, msg: &str) -> io::Result<()> {
        print_info_message(&mut self.output, msg, self.theme, self.enable_colors)
    }

    fn error(&mut self, msg: &str) -> io::Result<()> {
        print_error_message(&mut self.output, msg, self.theme, self.enable_colors)
    }
}

/// Runs the menu on the process's stdin and stdout.
pub fn run_interactive(seed: Option<u64>, theme: &ThemeMap, enable_colors: bool) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = InteractiveShell::new(stdin.lock(), stdout.lock(), make_rng(seed), theme, enable_colors);
    shell.run()
}
