//! Core term types for the telos matching engine.
//!
//! A [`GroundTerm`] is an opaque identifier for an ontology class, property,
//! or individual — the engine compares ground terms by identity only and
//! never interprets them. A [`Term`] occupies one template slot and is either
//! a ground term or a named variable.

use serde::{Deserialize, Serialize};

/// Opaque identifier for an ontology entity.
///
/// The engine treats the contents as an uninterpreted identity: two ground
/// terms are equal iff their identifiers are byte-for-byte equal. IRIs,
/// prefixed names, and plain labels all work — whatever the belief/goal
/// store uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroundTerm(String);

impl GroundTerm {
    /// Create a ground term from any string-like identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The underlying identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GroundTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroundTerm {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GroundTerm {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One slot of an axiom template: a fixed ground term or a named variable.
///
/// Variable names carry their `?` sigil (e.g. `"?$1"`), matching the
/// convention used in trigger declarations and in binding environments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A fixed term that must match the instance exactly.
    Bound(GroundTerm),
    /// A placeholder bound during unification.
    Var(String),
}

impl Term {
    /// Whether this slot is a variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    /// Whether this slot is a fixed ground term.
    pub fn is_bound(&self) -> bool {
        matches!(self, Term::Bound(_))
    }

    /// The ground term, if this slot is fixed.
    pub fn as_bound(&self) -> Option<&GroundTerm> {
        match self {
            Term::Bound(t) => Some(t),
            Term::Var(_) => None,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Bound(t) => write!(f, "{t}"),
            Term::Var(name) => f.write_str(name),
        }
    }
}
