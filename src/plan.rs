//! Plan handles: opaque references to plan bodies owned by the plan loader.
//!
//! The matching engine never invokes a plan. A [`PlanHandle`] is the token a
//! [`MatchResult`] carries back to the reasoning cycle, which owns the mapping
//! from handle to executable plan. The [`PlanHandleAllocator`] gives the
//! plan-loading layer collision-free handles.
//!
//! [`MatchResult`]: crate::dispatch::MatchResult

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, TelosResult};

/// Unique, niche-optimized reference to a plan.
///
/// Uses `NonZeroU64` so that `Option<PlanHandle>` is the same size as
/// `PlanHandle` (0 serves as the `None` discriminant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PlanHandle(NonZeroU64);

impl PlanHandle {
    /// Create a `PlanHandle` from a raw `u64`.
    ///
    /// Returns `None` if `raw` is zero.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(PlanHandle)
    }

    /// Get the underlying `u64` value.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for PlanHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "plan:{}", self.0)
    }
}

/// Thread-safe plan handle allocator.
///
/// Produces monotonically increasing handles starting from 1. Safe to share
/// across threads via `Arc<PlanHandleAllocator>`.
#[derive(Debug)]
pub struct PlanHandleAllocator {
    next: AtomicU64,
}

impl PlanHandleAllocator {
    /// Create a new allocator that starts from handle 1.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Allocate the next plan handle.
    ///
    /// Returns an error if the handle space is exhausted (after 2^64 - 1
    /// allocations).
    pub fn next_handle(&self) -> TelosResult<PlanHandle> {
        let raw = self.next.fetch_add(1, Ordering::Relaxed);
        PlanHandle::new(raw).ok_or_else(|| PlanError::HandlesExhausted.into())
    }
}

impl Default for PlanHandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}
