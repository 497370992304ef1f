//! Stage labels
//!
//! A [`Stage`] is a shared mutable label the producer updates as its work
//! moves through phases ("fetching", "verifying", ...). [`Staged`] bolts a
//! stage onto any progress provider so the render loop sees both through
//! one [`Progressable`] handle.

use super::Progressable;
use std::sync::{Arc, PoisonError, RwLock};

/// A shared, externally-mutable stage label. Clones share the label.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    label: Arc<RwLock<String>>,
}

impl Stage {
    /// Create a stage with an empty label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current label.
    pub fn set(&self, label: impl Into<String>) {
        let mut guard = self
            .label
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = label.into();
    }

    /// The current label; empty until first set.
    pub fn get(&self) -> String {
        self.label
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// A progress provider decorated with a stage label.
#[derive(Debug, Clone)]
pub struct Staged<P> {
    inner: P,
    stage: Stage,
}

impl<P> Staged<P> {
    /// Attach `stage` to `inner`.
    pub fn new(inner: P, stage: Stage) -> Self {
        Self { inner, stage }
    }

    /// Handle to the stage label for producer-side updates.
    pub fn stage_handle(&self) -> Stage {
        self.stage.clone()
    }
}

impl<P: Progressable> Progressable for Staged<P> {
    fn ratio(&self) -> f64 {
        self.inner.ratio()
    }

    fn current(&self) -> u64 {
        self.inner.current()
    }

    fn stage(&self) -> String {
        self.stage.get()
    }

    fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }
}
