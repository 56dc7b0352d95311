//! The non-interactive `roll` command.

use anyhow::{Context, Result};
use dicesim_core::{Analysis, DiceConfig, RollSession, RollSet, Statistics, Verdict};
use log::info;
use serde::Serialize;
use std::io::Write;

use crate::commands::make_rng;
use crate::ui::report::print_report;
use crate::ui::roll_table::print_rolls;
use crate::ui::theme::ThemeMap;

/// Options for one `roll` invocation.
#[derive(Debug, Clone)]
pub struct RollOptions {
    pub config: DiceConfig,
    pub seed: Option<u64>,
    pub json: bool,
}

#[derive(Serialize)]
struct RollReport<'a> {
    config: DiceConfig,
    rolls: &'a [RollSet],
    statistics: &'a Statistics,
    analysis: AnalysisSummary<'a>,
}

#[derive(Serialize)]
struct AnalysisSummary<'a> {
    expected_average: f64,
    verdict: &'a Verdict,
}

impl<'a> RollReport<'a> {
    fn new(config: DiceConfig, rolls: &'a [RollSet], analysis: &'a Analysis) -> Self {
        RollReport {
            config,
            rolls,
            statistics: &analysis.statistics,
            analysis: AnalysisSummary {
                expected_average: analysis.expected_average,
                verdict: &analysis.verdict,
            },
        }
    }
}

/// Rolls one batch and writes the results to `writer`.
pub fn run_roll<W: Write>(
    writer: &mut W,
    opts: &RollOptions,
    theme: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    info!("Starting roll command for {}.", opts.config);
    opts.config.validate().context("Invalid dice configuration")?;

    let mut rng = make_rng(opts.seed);
    let mut session = RollSession::new();
    session.roll(&mut rng, opts.config)?;

    let rolls = session.history().as_slice();
    let analysis = session
        .analyze()?
        .context("No rolls were produced to analyze")?;

    if opts.json {
        serde_json::to_writer_pretty(&mut *writer, &RollReport::new(opts.config, rolls, &analysis))
            .context("Failed to serialize roll report")?;
        writeln!(writer)?;
    } else {
        writeln!(
            writer,
            "Rolling {}d{} {} time(s)...",
            opts.config.dice_count, opts.config.sides, opts.config.roll_count
        )?;
        print_rolls(writer, rolls, 1, theme, enable_colors)?;
        print_report(writer, &analysis, theme, enable_colors)?;
    }

    info!("Roll command completed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::build_theme_map;

    fn run(opts: RollOptions) -> String {
        let mut out = Vec::new();
        run_roll(&mut out, &opts, &build_theme_map(), false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output_has_every_section() {
        let text = run(RollOptions { config: DiceConfig::new(3, 6, 4), seed: Some(1), json: false });
        assert!(text.contains("Rolling 3d6 4 time(s)..."));
        assert!(text.contains("ROLL RESULTS"));
        assert!(text.contains("STATISTICS"));
        assert!(text.contains("Over 4 rolls with 3d6:"));
    }

    #[test]
    fn json_output_is_a_single_document() {
        let text = run(RollOptions { config: DiceConfig::new(2, 10, 5), seed: Some(8), json: true });
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["config"]["dice_count"], 2);
        assert_eq!(json["rolls"].as_array().unwrap().len(), 5);
        assert_eq!(json["analysis"]["expected_average"], 11.0);
        assert_eq!(json["analysis"]["verdict"]["kind"], "series");
    }

    #[test]
    fn same_seed_same_report() {
        let opts = RollOptions { config: DiceConfig::new(4, 20, 10), seed: Some(99), json: true };
        assert_eq!(run(opts.clone()), run(opts));
    }

    #[test]
    fn invalid_configuration_is_reported() {
        let mut out = Vec::new();
        let opts = RollOptions { config: DiceConfig::new(0, 6, 1), seed: None, json: false };
        let err = run_roll(&mut out, &opts, &build_theme_map(), false).unwrap_err();
        assert!(format!("{:#}", err).contains("dice count must be between 1 and 20, got 0"));
        assert!(out.is_empty());
    }
}
