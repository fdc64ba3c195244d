//! Change events: the push-style feed from the belief/goal store.
//!
//! Every committed mutation of the agent's belief or goal store arrives here
//! as one immutable [`ChangeEvent`]. The event's [`EventKey`] — source store,
//! change kind, axiom kind — is the registry index, so kind-based bucketing
//! short-circuits before any unification is attempted.

use serde::{Deserialize, Serialize};

use crate::axiom::AxiomKind;
use crate::error::EventError;
use crate::term::GroundTerm;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Which store a mutation was committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreKind {
    /// The agent's belief base.
    Belief,
    /// The agent's goal base.
    Goal,
}

impl std::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreKind::Belief => f.write_str("Belief"),
            StoreKind::Goal => f.write_str("Goal"),
        }
    }
}

/// The direction of a store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// The axiom was asserted.
    Added,
    /// The axiom was retracted.
    Removed,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeKind::Added => f.write_str("Added"),
            ChangeKind::Removed => f.write_str("Removed"),
        }
    }
}

/// Registry index key: the full classification of an event.
///
/// Triggers registered under one key are never even considered for events
/// carrying a different key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventKey {
    /// Originating store.
    pub source: StoreKind,
    /// Assertion or retraction.
    pub change: ChangeKind,
    /// Structural category of the mutated axiom.
    pub kind: AxiomKind,
}

impl std::fmt::Display for EventKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.change, self.source, self.kind)
    }
}

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// One committed mutation of the belief or goal store.
///
/// Immutable once constructed. The instance is a ground axiom: an ordered
/// sequence of [`GroundTerm`]s whose length equals the axiom kind's arity —
/// enforced by [`ChangeEvent::new`], so downstream matching never re-checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    source: StoreKind,
    change: ChangeKind,
    kind: AxiomKind,
    instance: Vec<GroundTerm>,
    timestamp: u64,
}

impl ChangeEvent {
    /// Build an event, validating the instance against the kind's arity.
    pub fn new(
        source: StoreKind,
        change: ChangeKind,
        kind: AxiomKind,
        instance: Vec<GroundTerm>,
        timestamp: u64,
    ) -> Result<Self, EventError> {
        let expected = kind.arity();
        if instance.len() != expected {
            return Err(EventError::ArityMismatch {
                kind,
                expected,
                actual: instance.len(),
            });
        }
        Ok(Self {
            source,
            change,
            kind,
            instance,
            timestamp,
        })
    }

    /// Build an event stamped with the current wall-clock time.
    pub fn now(
        source: StoreKind,
        change: ChangeKind,
        kind: AxiomKind,
        instance: Vec<GroundTerm>,
    ) -> Result<Self, EventError> {
        Self::new(source, change, kind, instance, unix_now())
    }

    /// Originating store.
    pub fn source(&self) -> StoreKind {
        self.source
    }

    /// Assertion or retraction.
    pub fn change(&self) -> ChangeKind {
        self.change
    }

    /// Structural category of the mutated axiom.
    pub fn kind(&self) -> AxiomKind {
        self.kind
    }

    /// The ground terms of the mutated axiom, in slot order.
    pub fn instance(&self) -> &[GroundTerm] {
        &self.instance
    }

    /// Commit time, seconds since the UNIX epoch.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// The registry index key for this event.
    pub fn key(&self) -> EventKey {
        EventKey {
            source: self.source,
            change: self.change,
            kind: self.kind,
        }
    }
}

/// Seconds since the UNIX epoch.
fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
