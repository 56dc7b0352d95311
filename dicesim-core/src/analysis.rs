// dicesim-core/src/analysis.rs
//! Qualitative interpretation of a roll history.
//!
//! `analyze` compares what was rolled against the theoretical expectation for
//! the given dice and returns a structured verdict. It produces no text; the
//! shell decides how to phrase and decorate each outcome.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::Serialize;

use crate::errors::{DiceError, Result};
use crate::roller::RollSet;
use crate::statistics::Statistics;

/// Above this fraction of the side count, the spread counts as wide.
pub const WIDE_SPREAD_FACTOR: f64 = 0.5;
/// Below this fraction of the side count, the spread counts as consistent.
pub const CONSISTENT_SPREAD_FACTOR: f64 = 0.2;

/// Mean total of `dice_count` fair dice with `sides` faces.
pub fn expected_average(dice_count: usize, sides: u32) -> f64 {
    dice_count as f64 * (f64::from(sides) + 1.0) / 2.0
}

/// How a lone roll set compares with the expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RollOutcome {
    MatchesExactly,
    AboveExpectation,
    BelowExpectation,
}

/// How the average of a series compares with the expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AverageOutcome {
    AtOrAbove,
    Below,
}

/// Classification of the range between the highest and lowest totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Spread {
    WideVariety,
    QuiteConsistent,
    Normal,
}

impl Spread {
    pub fn classify(range: u64, sides: u32) -> Spread {
        let range = range as f64;
        let sides = f64::from(sides);
        if range > sides * WIDE_SPREAD_FACTOR {
            Spread::WideVariety
        } else if range < sides * CONSISTENT_SPREAD_FACTOR {
            Spread::QuiteConsistent
        } else {
            Spread::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// Exactly one roll set in the history.
    SingleRoll { total: u64, outcome: RollOutcome },
    /// Two or more roll sets.
    Series {
        /// `average - expected_average`; negative when below.
        difference: f64,
        outcome: AverageOutcome,
        range: u64,
        spread: Spread,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub dice_count: usize,
    pub sides: u32,
    pub expected_average: f64,
    pub statistics: Statistics,
    pub verdict: Verdict,
}

/// Analyzes `history` as if every set were rolled with `dice_count`d`sides`.
///
/// Returns `Ok(None)` for an empty history, whatever the parameters, and
/// `InvalidSides` when `sides` is zero.
pub fn analyze(history: &[RollSet], dice_count: usize, sides: u32) -> Result<Option<Analysis>> {
    let Some(statistics) = Statistics::compute(history) else {
        return Ok(None);
    };
    if sides < 1 {
        return Err(DiceError::InvalidSides(sides));
    }

    let expected = expected_average(dice_count, sides);
    let verdict = if history.len() == 1 {
        let total = statistics.total_sum;
        let outcome = if statistics.average == expected {
            RollOutcome::MatchesExactly
        } else if statistics.average > expected {
            RollOutcome::AboveExpectation
        } else {
            RollOutcome::BelowExpectation
        };
        Verdict::SingleRoll { total, outcome }
    } else {
        let difference = statistics.average - expected;
        let outcome = if difference >= 0.0 {
            AverageOutcome::AtOrAbove
        } else {
            AverageOutcome::Below
        };
        let range = statistics.range();
        Verdict::Series {
            difference,
            outcome,
            range,
            spread: Spread::classify(range, sides),
        }
    };

    debug!("Analysis of {}d{} against expectation {:.2}: {:?}", dice_count, sides, expected, verdict);

    Ok(Some(Analysis {
        dice_count,
        sides,
        expected_average: expected,
        statistics,
        verdict,
    }))
}
