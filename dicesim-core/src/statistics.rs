// dicesim-core/src/statistics.rs
//! Summary statistics over a roll history.

use log::debug;
use serde::Serialize;

use crate::roller::{DieRoll, RollSet};

/// Plain arithmetic sum. The empty slice sums to zero.
pub fn sum(values: &[DieRoll]) -> u64 {
    values.iter().map(|&v| u64::from(v)).sum()
}

/// Snapshot of a roll history at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Sum of every die value in the history.
    pub total_sum: u64,
    /// Mean roll-set total.
    pub average: f64,
    /// Highest single die value (0 if no dice were rolled).
    pub max_value: DieRoll,
    /// Lowest single die value (0 if no dice were rolled).
    pub min_value: DieRoll,
    /// Highest roll-set total.
    pub max_roll: u64,
    /// Lowest roll-set total.
    pub min_roll: u64,
    /// Sample standard deviation of the roll-set totals, zero below two sets.
    pub std_dev: f64,
    /// Roll-set totals, in history order.
    pub roll_totals: Vec<u64>,
    /// Every die value, flattened in history order.
    pub all_values: Vec<DieRoll>,
}

impl Statistics {
    /// Computes the snapshot, or `None` for an empty history.
    pub fn compute(history: &[RollSet]) -> Option<Statistics> {
        if history.is_empty() {
            return None;
        }

        let roll_totals: Vec<u64> = history.iter().map(|set| sum(set)).collect();
        let all_values: Vec<DieRoll> = history.iter().flatten().copied().collect();

        let total_sum: u64 = roll_totals.iter().sum();
        let average = total_sum as f64 / history.len() as f64;
        let max_value = all_values.iter().copied().max().unwrap_or(0);
        let min_value = all_values.iter().copied().min().unwrap_or(0);
        let max_roll = roll_totals.iter().copied().max().unwrap_or(0);
        let min_roll = roll_totals.iter().copied().min().unwrap_or(0);
        let std_dev = sample_std_dev(&roll_totals, average);

        debug!(
            "Computed statistics over {} roll set(s): total {}, average {:.2}",
            history.len(),
            total_sum,
            average
        );

        Some(Statistics {
            total_sum,
            average,
            max_value,
            min_value,
            max_roll,
            min_roll,
            std_dev,
            roll_totals,
            all_values,
        })
    }

    /// Spread between the highest and lowest roll-set totals.
    pub fn range(&self) -> u64 {
        self.max_roll - self.min_roll
    }

    pub fn roll_count(&self) -> usize {
        self.roll_totals.len()
    }
}

// n - 1 denominator; undefined below two samples, reported as zero.
fn sample_std_dev(totals: &[u64], mean: f64) -> f64 {
    if totals.len() < 2 {
        return 0.0;
    }
    let variance = totals
        .iter()
        .map(|&total| {
            let diff = mean - total as f64;
            diff * diff
        })
        .sum::<f64>()
        / (totals.len() - 1) as f64;
    variance.sqrt()
}
