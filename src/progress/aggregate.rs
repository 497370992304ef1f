//! Combining multiple counters into one ratio
//!
//! An [`Aggregator`] owns a set of [`Tracker`] handles and folds them into
//! a single normalized ratio under a [`Strategy`]. Gauges (counters with no
//! capacity) never enter a ratio denominator; they contribute raw counts
//! only.

use super::Progressable;
use super::tracker::Tracker;

/// Normalization strategy for combining sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// `sum(consumed) / sum(capacity)` over sized sources.
    ///
    /// Weighs each source by its capacity, so a large download dominates a
    /// small one proportionally.
    #[default]
    Normalize,
    /// Unweighted mean of the per-source ratios of sized sources.
    Mean,
}

/// Folds one or more trackers into a single progress value.
#[derive(Debug, Clone)]
pub struct Aggregator {
    sources: Vec<Tracker>,
    strategy: Strategy,
}

impl Aggregator {
    /// Create an aggregator over `sources`.
    pub fn new(strategy: Strategy, sources: impl IntoIterator<Item = Tracker>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
            strategy,
        }
    }

    /// Register another source.
    pub fn push(&mut self, source: Tracker) {
        self.sources.push(source);
    }

    /// Combined ratio across all sized sources.
    ///
    /// Returns 0 when there is no known capacity at all; never divides by
    /// zero. May exceed 1 if a producer overran its capacity.
    pub fn ratio(&self) -> f64 {
        match self.strategy {
            Strategy::Normalize => {
                let mut consumed = 0u64;
                let mut capacity = 0u64;
                for source in &self.sources {
                    if let Some(cap) = source.capacity() {
                        consumed += source.current();
                        capacity += cap;
                    }
                }
                if capacity == 0 {
                    0.0
                } else {
                    consumed as f64 / capacity as f64
                }
            }
            Strategy::Mean => {
                let ratios: Vec<f64> = self.sources.iter().filter_map(Tracker::ratio).collect();
                if ratios.is_empty() {
                    0.0
                } else {
                    ratios.iter().sum::<f64>() / ratios.len() as f64
                }
            }
        }
    }

    /// Sum of raw counts across every source, gauges included.
    pub fn current(&self) -> u64 {
        self.sources.iter().map(Tracker::current).sum()
    }

    /// True once every source is complete.
    pub fn is_complete(&self) -> bool {
        self.sources.iter().all(Tracker::is_complete)
    }
}

impl Progressable for Aggregator {
    fn ratio(&self) -> f64 {
        Self::ratio(self)
    }

    fn current(&self) -> u64 {
        Self::current(self)
    }

    fn is_complete(&self) -> bool {
        Self::is_complete(self)
    }
}
