//! Load generations: drop responses that belong to a screen mount that is gone.
//!
//! Each mount takes a [`LoadTicket`]. Mounting again or unmounting advances the
//! generation, so a response that finishes late compares its ticket against
//! the current generation and is discarded instead of overwriting newer data.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Identifies the mount a request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// Shared generation counter. Clones observe the same generation, so a task
/// holding a clone can check whether its result is still wanted.
#[derive(Debug, Clone, Default)]
pub struct ScreenGeneration {
    current: Arc<AtomicU64>,
}

impl ScreenGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load cycle; all earlier tickets become stale.
    pub fn mount(&self) -> LoadTicket {
        LoadTicket(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Invalidate every outstanding ticket.
    pub fn unmount(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.current.load(Ordering::Acquire) == ticket.0
    }
}
