//! Work counters fed by producers
//!
//! A [`Tracker`] is a cheap-clone handle around an atomic counter. The
//! producer side calls [`Tracker::add`] (or writes bytes through the
//! [`std::io::Write`] impl) from a single task; the aggregation side reads
//! concurrently without further synchronization.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug)]
struct Inner {
    consumed: AtomicU64,
    capacity: Option<u64>,
    complete: AtomicBool,
}

/// A bounded or unbounded monotonic work counter.
///
/// Clones share the same counter. The counter is monotonically
/// non-decreasing until [`Tracker::complete`] is called, after which
/// further writes are ignored and reads return the final value.
#[derive(Debug, Clone)]
pub struct Tracker {
    inner: Arc<Inner>,
}

impl Tracker {
    /// A counter with a known capacity; its ratio is `consumed / capacity`.
    pub fn sized(capacity: u64) -> Self {
        Self::with_capacity(Some(capacity))
    }

    /// An open-ended gauge: no capacity, no ratio, raw count only.
    pub fn gauge() -> Self {
        Self::with_capacity(None)
    }

    fn with_capacity(capacity: Option<u64>) -> Self {
        Self {
            inner: Arc::new(Inner {
                consumed: AtomicU64::new(0),
                capacity,
                complete: AtomicBool::new(false),
            }),
        }
    }

    /// Record `n` units of completed work. Ignored once complete.
    pub fn add(&self, n: u64) {
        if !self.is_complete() {
            self.inner.consumed.fetch_add(n, Ordering::Relaxed);
        }
    }

    /// Mark the counter finished. Idempotent.
    pub fn complete(&self) {
        self.inner.complete.store(true, Ordering::Release);
    }

    /// Whether [`Tracker::complete`] has been called.
    pub fn is_complete(&self) -> bool {
        self.inner.complete.load(Ordering::Acquire)
    }

    /// Units consumed so far.
    pub fn current(&self) -> u64 {
        self.inner.consumed.load(Ordering::Relaxed)
    }

    /// The capacity, if this is a sized counter.
    pub fn capacity(&self) -> Option<u64> {
        self.inner.capacity
    }

    /// `consumed / capacity` for sized counters, `None` for gauges.
    ///
    /// A zero capacity yields 0 rather than dividing by zero. The result
    /// may exceed 1 if a producer overruns its capacity; that is
    /// deliberately not clamped here so overruns stay observable.
    pub fn ratio(&self) -> Option<f64> {
        self.inner.capacity.map(|cap| {
            if cap == 0 {
                0.0
            } else {
                self.current() as f64 / cap as f64
            }
        })
    }
}

impl io::Write for Tracker {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.add(buf.len() as u64);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sized_ratio() {
        let tracker = Tracker::sized(1000);
        assert_eq!(tracker.ratio(), Some(0.0));
        tracker.add(300);
        assert_eq!(tracker.ratio(), Some(0.3));
        assert_eq!(tracker.current(), 300);
    }

    #[test]
    fn test_zero_capacity_never_divides() {
        let tracker = Tracker::sized(0);
        tracker.add(42);
        assert_eq!(tracker.ratio(), Some(0.0));
    }

    #[test]
    fn test_gauge_has_no_ratio() {
        let tracker = Tracker::gauge();
        tracker.add(549);
        assert_eq!(tracker.ratio(), None);
        assert_eq!(tracker.current(), 549);
    }

    #[test]
    fn test_overrun_is_observable() {
        let tracker = Tracker::sized(100);
        tracker.add(150);
        assert_eq!(tracker.ratio(), Some(1.5));
    }

    #[test]
    fn test_writes_after_complete_are_ignored() {
        let tracker = Tracker::sized(10);
        tracker.add(5);
        tracker.complete();
        tracker.complete(); // idempotent
        tracker.add(5);
        assert_eq!(tracker.current(), 5);
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_write_trait_counts_bytes() {
        let mut tracker = Tracker::sized(1000);
        let reader = tracker.clone();
        let n = tracker.write(&[0u8; 64]).unwrap();
        assert_eq!(n, 64);
        assert_eq!(reader.current(), 64);
    }

    #[test]
    fn test_clones_share_state() {
        let a = Tracker::gauge();
        let b = a.clone();
        a.add(7);
        b.add(3);
        assert_eq!(a.current(), 10);
        b.complete();
        assert!(a.is_complete());
    }
}
