//! Engine facade: the reasoning cycle's single entry point.
//!
//! A [`MatchEngine`] wraps a sealed, `Arc`-shared [`TriggerRegistry`] and
//! exposes `dispatch`: classify the event, unify its candidates, rank the
//! matches. One engine per agent; many agents on separate threads may share
//! one registry, because a sealed registry is read-only.
//!
//! The engine owns no persistent state of its own — each dispatch is a pure
//! function of (registry, event) — and never suspends or blocks, so it is
//! invoked directly on the agent's reasoning thread.

use std::sync::Arc;

use tracing::debug;

use crate::dispatch::{MatchResult, dispatch};
use crate::error::{RegistryError, TelosResult};
use crate::event::ChangeEvent;
use crate::registry::TriggerRegistry;
use crate::select::select;

/// The matching engine handed to an agent's reasoning cycle.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    registry: Arc<TriggerRegistry>,
}

impl MatchEngine {
    /// Wrap a sealed registry.
    ///
    /// Fails with [`RegistryError::NotReady`] if the registry has not been
    /// sealed — constructing an engine over an open registry would let
    /// readers race the plan-loading phase.
    pub fn new(registry: Arc<TriggerRegistry>) -> TelosResult<Self> {
        if !registry.is_sealed() {
            return Err(RegistryError::NotReady.into());
        }
        Ok(Self { registry })
    }

    /// The shared registry backing this engine.
    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }

    /// Match one change event, returning ranked activation candidates.
    ///
    /// Results are ordered by descending specificity, ties by registration
    /// order. The reasoning cycle owns deciding how many to activate and how
    /// to invoke each plan with its bindings.
    pub fn dispatch(&self, event: &ChangeEvent) -> TelosResult<Vec<MatchResult>> {
        let matches = dispatch(&self.registry, event)?;
        let ranked = select(matches);
        debug!(
            key = %event.key(),
            matched = ranked.len(),
            "ranked activation candidates"
        );
        Ok(ranked)
    }
}
