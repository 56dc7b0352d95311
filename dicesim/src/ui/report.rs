//! Renders statistics and analysis verdicts as text.
//!
//! The core hands back structured outcomes; this module owns the wording and
//! the ✓ ✗ ○ markers.

use dicesim_core::{Analysis, AverageOutcome, RollOutcome, Spread, Statistics, Verdict};
use std::io::{self, Write};

use crate::ui::output_format::{print_message, print_section_footer, print_section_header};
use crate::ui::theme::{ThemeEntry, ThemeMap};

pub fn print_statistics<W: Write + ?Sized>(
    writer: &mut W,
    stats: &Statistics,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_section_header(writer, "STATISTICS", theme, enable_colors)?;
    writeln!(writer, "Total Sum:        {}", stats.total_sum)?;
    writeln!(writer, "Average Per Roll: {:.2}", stats.average)?;
    writeln!(writer, "Highest Die Roll: {}", stats.max_value)?;
    writeln!(writer, "Lowest Die Roll:  {}", stats.min_value)?;
    writeln!(writer, "Max Roll Total:   {}", stats.max_roll)?;
    writeln!(writer, "Min Roll Total:   {}", stats.min_roll)?;
    if stats.std_dev > 0.0 {
        writeln!(writer, "Std Deviation:    {:.2}", stats.std_dev)?;
    }
    print_section_footer(writer, theme, enable_colors)
}

pub fn print_analysis<W: Write + ?Sized>(
    writer: &mut W,
    analysis: &Analysis,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let stats = &analysis.statistics;
    print_section_header(writer, "ANALYSIS", theme, enable_colors)?;

    match &analysis.verdict {
        Verdict::SingleRoll { outcome, .. } => {
            writeln!(
                writer,
                "You rolled {} dice with {} sides each.",
                analysis.dice_count, analysis.sides
            )?;
            let (line, entry) = match outcome {
                RollOutcome::MatchesExactly => {
                    ("✓ The roll matches the expected average perfectly!", ThemeEntry::Success)
                }
                RollOutcome::AboveExpectation => {
                    ("✓ Great luck! Your roll is above the expected average.", ThemeEntry::Success)
                }
                RollOutcome::BelowExpectation => {
                    ("✗ The roll is below the expected average.", ThemeEntry::Error)
                }
            };
            print_message(writer, line, entry, theme, enable_colors)?;
        }
        Verdict::Series { difference, outcome, range, spread } => {
            writeln!(
                writer,
                "Over {} rolls with {}d{}:",
                stats.roll_count(),
                analysis.dice_count,
                analysis.sides
            )?;
            writeln!(writer, "Expected average: {:.2}", analysis.expected_average)?;

            let (line, entry) = match outcome {
                AverageOutcome::AtOrAbove => (
                    format!(
                        "✓ Your average ({:.2}) is {:.2} above the expected average.",
                        stats.average, difference
                    ),
                    ThemeEntry::Success,
                ),
                AverageOutcome::Below => (
                    format!(
                        "✗ Your average ({:.2}) is {:.2} below the expected average.",
                        stats.average,
                        difference.abs()
                    ),
                    ThemeEntry::Error,
                ),
            };
            print_message(writer, &line, entry, theme, enable_colors)?;

            writeln!(
                writer,
                "Distribution range: {} (from {} to {})",
                range, stats.min_roll, stats.max_roll
            )?;
            let (line, entry) = match spread {
                Spread::WideVariety => ("✓ You have a wide variety of results!", ThemeEntry::Success),
                Spread::QuiteConsistent => ("✓ Your results are quite consistent.", ThemeEntry::Success),
                Spread::Normal => ("○ Your results show normal distribution.", ThemeEntry::Neutral),
            };
            print_message(writer, line, entry, theme, enable_colors)?;
        }
    }

    print_section_footer(writer, theme, enable_colors)
}

/// Statistics followed by the analysis, as shown after every roll.
pub fn print_report<W: Write + ?Sized>(
    writer: &mut W,
    analysis: &Analysis,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_statistics(writer, &analysis.statistics, theme, enable_colors)?;
    print_analysis(writer, analysis, theme, enable_colors)
}
