//! Template compiler: raw patterns → validated, immutable axiom templates.
//!
//! A plan declares each trigger as an axiom kind plus ordered slot
//! specifications — strings where a leading `?` marks a variable and anything
//! else names a bound term. [`AxiomTemplate::compile`] validates the shape
//! once, at plan-load time, so matching never re-checks arity or slot syntax.
//!
//! Compilation is pure: it consults no registry, has no side effects, and is
//! idempotent — compiling the same raw pattern twice yields structurally
//! equal templates.

use serde::{Deserialize, Serialize};

use crate::axiom::AxiomKind;
use crate::error::TemplateError;
use crate::term::{GroundTerm, Term};

// ---------------------------------------------------------------------------
// AxiomTemplate
// ---------------------------------------------------------------------------

/// A compiled, immutable pattern over one axiom kind.
///
/// Invariant: `slots.len() == kind.arity()`, established at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxiomTemplate {
    kind: AxiomKind,
    slots: Vec<Term>,
}

impl AxiomTemplate {
    /// Compile raw slot specifications into a validated template.
    ///
    /// Fails with [`TemplateError`] when the slot count differs from the
    /// kind's arity, a slot spec is empty, or a variable has no name.
    pub fn compile(kind: AxiomKind, specs: &[&str]) -> Result<Self, TemplateError> {
        let slots = builder_for(kind)(kind, specs)?;
        Ok(Self { kind, slots })
    }

    /// The axiom kind this template matches against.
    pub fn kind(&self) -> AxiomKind {
        self.kind
    }

    /// The compiled slots, in position order.
    pub fn slots(&self) -> &[Term] {
        &self.slots
    }

    /// Number of slots (equals the kind's arity).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the template has no slots. Always false for the current
    /// axiom kinds, whose arities are all nonzero.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of fixed (non-variable) slots — the match specificity.
    ///
    /// Higher values denote a more precisely targeted trigger: a fully
    /// ground template outranks a catch-all of the same kind.
    pub fn specificity(&self) -> usize {
        self.slots.iter().filter(|s| s.is_bound()).count()
    }

    /// Distinct variable names appearing in this template, in first-occurrence
    /// order. Repeated occurrences of one name are a join constraint, not two
    /// variables.
    pub fn variables(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for slot in &self.slots {
            if let Term::Var(name) = slot {
                if !seen.contains(&name.as_str()) {
                    seen.push(name.as_str());
                }
            }
        }
        seen
    }
}

/// Displays as `Kind(slot, slot, …)`, e.g. `HasKey(agentA, ?$2, valueX)`.
impl std::fmt::Display for AxiomTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str(")")
    }
}

// ---------------------------------------------------------------------------
// Per-kind builders
// ---------------------------------------------------------------------------

/// Compile function for one axiom-kind family.
type TemplateBuilder = fn(AxiomKind, &[&str]) -> Result<Vec<Term>, TemplateError>;

/// Static dispatch table: axiom kind → template builder.
fn builder_for(kind: AxiomKind) -> TemplateBuilder {
    match kind {
        AxiomKind::ClassAssertion | AxiomKind::SubClassOf => build_pair,
        AxiomKind::ObjectPropertyAssertion
        | AxiomKind::DataPropertyAssertion
        | AxiomKind::HasKey => build_triple,
    }
}

fn build_pair(kind: AxiomKind, specs: &[&str]) -> Result<Vec<Term>, TemplateError> {
    build_slots(kind, specs, 2)
}

fn build_triple(kind: AxiomKind, specs: &[&str]) -> Result<Vec<Term>, TemplateError> {
    build_slots(kind, specs, 3)
}

fn build_slots(
    kind: AxiomKind,
    specs: &[&str],
    expected: usize,
) -> Result<Vec<Term>, TemplateError> {
    debug_assert_eq!(expected, kind.arity());
    if specs.len() != expected {
        return Err(TemplateError::ArityMismatch {
            kind,
            expected,
            actual: specs.len(),
        });
    }
    specs
        .iter()
        .enumerate()
        .map(|(position, spec)| parse_slot(spec, position))
        .collect()
}

/// Parse one slot spec: leading `?` marks a variable, anything else names a
/// bound term. No implicit coercion between the two.
fn parse_slot(spec: &str, position: usize) -> Result<Term, TemplateError> {
    if let Some(name) = spec.strip_prefix('?') {
        if name.is_empty() {
            return Err(TemplateError::EmptyVariableName { position });
        }
        // Keep the sigil: binding environments are keyed by "?$1" etc.
        Ok(Term::Var(spec.to_string()))
    } else if spec.is_empty() {
        Err(TemplateError::EmptySlot { position })
    } else {
        Ok(Term::Bound(GroundTerm::new(spec)))
    }
}
