// dicesim-core/src/session.rs
//! Caller-owned roll history.
//!
//! A `RollSession` holds everything that survives between two actions of a
//! shell: the accumulated roll sets and the configuration they were last
//! extended with. Nothing here is global; each caller owns its own session.

use log::{debug, info};
use rand::Rng;

use crate::analysis::{self, Analysis};
use crate::config::DiceConfig;
use crate::errors::Result;
use crate::roller::{self, RollSet};
use crate::statistics::Statistics;

/// Ordered, append-only list of roll sets. Can only shrink by clearing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollHistory {
    sets: Vec<RollSet>,
}

impl RollHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I: IntoIterator<Item = RollSet>>(&mut self, sets: I) {
        self.sets.extend(sets);
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn as_slice(&self) -> &[RollSet] {
        &self.sets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RollSet> {
        self.sets.iter()
    }
}

impl From<Vec<RollSet>> for RollHistory {
    fn from(sets: Vec<RollSet>) -> Self {
        RollHistory { sets }
    }
}

#[derive(Debug, Default)]
pub struct RollSession {
    history: RollHistory,
    last_config: Option<DiceConfig>,
}

impl RollSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    pub fn last_config(&self) -> Option<DiceConfig> {
        self.last_config
    }

    /// Rolls one batch with `config`, appends it and returns the new sets.
    ///
    /// The configuration is validated first; a rejected batch leaves both the
    /// history and the last configuration untouched.
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R, config: DiceConfig) -> Result<&[RollSet]> {
        config.validate()?;
        let sets = roller::roll_many(rng, config.dice_count, config.sides, config.roll_count)?;
        let start = self.history.len();
        self.history.extend(sets);
        self.last_config = Some(config);
        debug!("Session history now holds {} roll set(s).", self.history.len());
        Ok(&self.history.as_slice()[start..])
    }

    /// Drops every recorded roll set. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.history.len();
        self.history.clear();
        self.last_config = None;
        info!("Cleared {} roll set(s) from the session.", removed);
        removed
    }

    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::compute(self.history.as_slice())
    }

    /// Analyzes the whole history against the last configuration used.
    pub fn analyze(&self) -> Result<Option<Analysis>> {
        match self.last_config {
            Some(config) => analysis::analyze(self.history.as_slice(), config.dice_count, config.sides),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rolls_accumulate_across_batches() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = RollSession::new();

        let first = session.roll(&mut rng, DiceConfig::new(2, 6, 3)).unwrap().to_vec();
        assert_eq!(first.len(), 3);

        let second = session.roll(&mut rng, DiceConfig::new(1, 20, 2)).unwrap().to_vec();
        assert_eq!(second.len(), 2);
        assert!(second.iter().all(|set| set.len() == 1));

        assert_eq!(session.history().len(), 5);
        assert_eq!(&session.history().as_slice()[..3], first.as_slice());
        assert_eq!(session.last_config(), Some(DiceConfig::new(1, 20, 2)));
    }

    #[test]
    fn failed_roll_leaves_history_untouched() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = RollSession::new();
        session.roll(&mut rng, DiceConfig::new(1, 6, 1)).unwrap();

        assert!(session.roll(&mut rng, DiceConfig::new(1, 0, 4)).is_err());
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.last_config(), Some(DiceConfig::new(1, 6, 1)));
    }

    #[test]
    fn empty_or_invalid_batches_do_not_replace_the_config() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = RollSession::new();
        session.roll(&mut rng, DiceConfig::new(2, 6, 5)).unwrap();
        let before = session.history().clone();

        assert!(session.roll(&mut rng, DiceConfig::new(1, 0, 0)).is_err());
        assert!(session.roll(&mut rng, DiceConfig::new(3, 20, 0)).is_err());
        assert!(session.roll(&mut rng, DiceConfig::new(0, 6, 2)).is_err());

        assert_eq!(session.history(), &before);
        assert_eq!(session.last_config(), Some(DiceConfig::new(2, 6, 5)));
        let analysis = session.analyze().unwrap().unwrap();
        assert_eq!(analysis.expected_average, 7.0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = RollSession::new();
        session.roll(&mut rng, DiceConfig::new(3, 8, 4)).unwrap();

        assert_eq!(session.clear(), 4);
        assert!(session.history().is_empty());
        assert!(session.statistics().is_none());
        assert!(session.analyze().unwrap().is_none());
    }

    #[test]
    fn history_from_fixed_sets() {
        let history = RollHistory::from(vec![vec![1, 2], vec![3]]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.iter().map(Vec::len).sum::<usize>(), 3);
    }
}
