//! Trigger registry: compiled templates indexed for O(1) candidate lookup.
//!
//! The [`TriggerRegistry`] buckets [`TriggerDeclaration`]s by [`EventKey`]
//! (source store, change kind, axiom kind), so an incoming event only ever
//! sees the triggers declared for exactly its classification. Within a
//! bucket, registration order is preserved — it is the tie-break when two
//! matched templates have equal specificity.
//!
//! The registry is two-phase. **Open**: accepts `register`, rejects lookups.
//! **Sealed**: rejects `register`, serves lookups. The agent lifecycle seals
//! exactly once after plan loading; a sealed registry has no interior
//! mutability, so it may be shared read-only (`Arc`) by any number of agent
//! threads without locking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{RegistryError, TelosResult};
use crate::event::{ChangeKind, EventKey, StoreKind};
use crate::plan::PlanHandle;
use crate::template::AxiomTemplate;

// ---------------------------------------------------------------------------
// TriggerDeclaration
// ---------------------------------------------------------------------------

/// One declared trigger: a pattern, the change it fires on, and its plan.
///
/// Plain data — a plan that declares several trigger patterns simply
/// registers several declarations sharing one [`PlanHandle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerDeclaration {
    /// The compiled pattern to unify against event instances.
    pub template: AxiomTemplate,
    /// Which store's mutations this trigger observes.
    pub source: StoreKind,
    /// Whether the trigger fires on assertion or retraction.
    pub change: ChangeKind,
    /// The plan to activate on a successful match.
    pub plan: PlanHandle,
}

impl TriggerDeclaration {
    /// Bundle a compiled template with its firing conditions and target plan.
    pub fn new(
        template: AxiomTemplate,
        source: StoreKind,
        change: ChangeKind,
        plan: PlanHandle,
    ) -> Self {
        Self {
            template,
            source,
            change,
            plan,
        }
    }

    /// The bucket key this declaration is indexed under.
    pub fn key(&self) -> EventKey {
        EventKey {
            source: self.source,
            change: self.change,
            kind: self.template.kind(),
        }
    }
}

// ---------------------------------------------------------------------------
// TriggerRegistry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Sealed,
}

/// Bucketed index of trigger declarations with a one-way Open → Sealed phase.
#[derive(Debug)]
pub struct TriggerRegistry {
    buckets: HashMap<EventKey, Vec<TriggerDeclaration>>,
    phase: Phase,
    len: usize,
}

impl TriggerRegistry {
    /// Create an empty registry in the Open phase.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
            phase: Phase::Open,
            len: 0,
        }
    }

    /// Register a trigger declaration, appending to its bucket.
    ///
    /// Fails with [`RegistryError::Closed`] after sealing; a failed call
    /// leaves the registry unchanged.
    pub fn register(&mut self, decl: TriggerDeclaration) -> TelosResult<()> {
        if self.phase == Phase::Sealed {
            return Err(RegistryError::Closed.into());
        }
        let key = decl.key();
        trace!(%key, plan = %decl.plan, template = %decl.template, "registering trigger");
        self.buckets.entry(key).or_default().push(decl);
        self.len += 1;
        Ok(())
    }

    /// Transition Open → Sealed. One-way, one-time; a second call fails with
    /// [`RegistryError::AlreadySealed`].
    pub fn seal(&mut self) -> TelosResult<()> {
        if self.phase == Phase::Sealed {
            return Err(RegistryError::AlreadySealed.into());
        }
        self.phase = Phase::Sealed;
        debug!(
            triggers = self.len,
            buckets = self.buckets.len(),
            "trigger registry sealed"
        );
        Ok(())
    }

    /// Whether the registry has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.phase == Phase::Sealed
    }

    /// The declarations registered under `key`, in registration order.
    ///
    /// Returns an empty slice when nothing is registered for the key. Fails
    /// with [`RegistryError::NotReady`] before sealing.
    pub fn candidates_for(&self, key: EventKey) -> TelosResult<&[TriggerDeclaration]> {
        if self.phase == Phase::Open {
            return Err(RegistryError::NotReady.into());
        }
        Ok(self
            .buckets
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Total number of registered declarations across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no declarations are registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for TriggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
