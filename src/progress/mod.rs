//! Progress model - counters, aggregation, staging, sampling
//!
//! Producers write raw work counts into [`Tracker`]s; an [`Aggregator`]
//! folds one or more trackers into a normalized ratio; [`Staged`] attaches
//! a human-readable phase label; [`stream`] samples the whole thing on a
//! fixed clock into a sequence of [`Progress`] snapshots for a render loop.
//!
//! Ownership: a tracker is written by exactly one producer task; the
//! aggregator and stream only ever read. Ratios are deliberately not
//! clamped above 1 anywhere in this module so capacity overruns remain
//! observable; only the bar renderer limits what it draws.

pub mod aggregate;
pub mod stage;
pub mod stream;
pub mod tracker;

pub use aggregate::{Aggregator, Strategy};
pub use stage::{Stage, Staged};
pub use stream::stream;
pub use tracker::Tracker;

/// One sampled progress snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    /// Normalized completion ratio, conventionally in `[0, 1]` but may
    /// exceed 1 on capacity overrun. Never negative.
    pub ratio: f64,
    /// Raw unit count, the value a gauge renders instead of a bar.
    pub current: u64,
    /// Current stage label; empty when unset.
    pub stage: String,
}

/// Capability interface for anything a [`stream`] can sample.
///
/// Implemented by [`Aggregator`] directly and by [`Staged`] wrappers; the
/// explicit composing type replaces structural embedding of stager plus
/// aggregator.
pub trait Progressable: Send + Sync {
    /// Normalized completion ratio. Never negative, may exceed 1.
    fn ratio(&self) -> f64;

    /// Raw unit count across all sources.
    fn current(&self) -> u64;

    /// Current stage label; defaults to empty.
    fn stage(&self) -> String {
        String::new()
    }

    /// True once all underlying work is finished.
    fn is_complete(&self) -> bool;

    /// Capture the current state as an owned snapshot.
    fn snapshot(&self) -> Progress {
        Progress {
            ratio: self.ratio(),
            current: self.current(),
            stage: self.stage(),
        }
    }
}
