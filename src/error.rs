//! Rich diagnostic error types for the telos matching engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so integrators know exactly what went
//! wrong and how to fix it. A failed unification is *not* an error — the unifier
//! returns `Option::None` for that expected, common outcome.

use miette::Diagnostic;
use thiserror::Error;

use crate::axiom::AxiomKind;

/// Top-level error type for the telos engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum TelosError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Plan(#[from] PlanError),
}

// ---------------------------------------------------------------------------
// Template compilation errors
// ---------------------------------------------------------------------------

/// Errors raised while compiling a raw pattern into an [`AxiomTemplate`].
///
/// Compilation is atomic: a failed compile produces no template and leaves
/// no trace in any registry.
///
/// [`AxiomTemplate`]: crate::template::AxiomTemplate
#[derive(Debug, Error, Diagnostic)]
pub enum TemplateError {
    #[error("{kind} requires {expected} slot(s), pattern has {actual}")]
    #[diagnostic(
        code(telos::template::arity_mismatch),
        help(
            "Each axiom kind fixes its slot count: ClassAssertion and SubClassOf \
             take 2 slots, the property assertions and HasKey take 3. \
             Adjust the pattern to match the kind's arity."
        )
    )]
    ArityMismatch {
        kind: AxiomKind,
        expected: usize,
        actual: usize,
    },

    #[error("empty slot specification at position {position}")]
    #[diagnostic(
        code(telos::template::empty_slot),
        help(
            "Every slot must name either a bound term (an ontology identifier) \
             or a variable (a name starting with '?', e.g. \"?$1\")."
        )
    )]
    EmptySlot { position: usize },

    #[error("variable at position {position} has no name (bare '?')")]
    #[diagnostic(
        code(telos::template::empty_variable),
        help(
            "A variable slot is '?' followed by a non-empty name, \
             conventionally \"?$1\", \"?$2\", … — any name is legal, \
             but it cannot be empty."
        )
    )]
    EmptyVariableName { position: usize },
}

// ---------------------------------------------------------------------------
// Registry phase errors
// ---------------------------------------------------------------------------

/// Phase-violation errors from the [`TriggerRegistry`].
///
/// These signal programmer errors in the surrounding agent lifecycle and are
/// surfaced synchronously rather than silently ignored.
///
/// [`TriggerRegistry`]: crate::registry::TriggerRegistry
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    #[error("registry is sealed: no further trigger registration is possible")]
    #[diagnostic(
        code(telos::registry::closed),
        help(
            "All register() calls must complete before the agent lifecycle \
             seals the registry. Move this registration into the plan-loading \
             phase, before seal() is called."
        )
    )]
    Closed,

    #[error("registry is still open: seal it before serving lookups")]
    #[diagnostic(
        code(telos::registry::not_ready),
        help(
            "candidates_for() and dispatch are only valid on a sealed registry. \
             Call seal() exactly once after all triggers are registered."
        )
    )]
    NotReady,

    #[error("registry is already sealed: seal() is a one-time transition")]
    #[diagnostic(
        code(telos::registry::already_sealed),
        help(
            "The Open → Sealed transition happens exactly once, performed by \
             the agent lifecycle after plan loading. A second seal() call \
             indicates a lifecycle bug."
        )
    )]
    AlreadySealed,
}

// ---------------------------------------------------------------------------
// Event construction errors
// ---------------------------------------------------------------------------

/// Errors raised while constructing a [`ChangeEvent`].
///
/// Checking arity at construction is what lets the unifier assume
/// template and instance lengths agree without re-validating per match.
///
/// [`ChangeEvent`]: crate::event::ChangeEvent
#[derive(Debug, Error, Diagnostic)]
pub enum EventError {
    #[error("{kind} instance requires {expected} term(s), got {actual}")]
    #[diagnostic(
        code(telos::event::arity_mismatch),
        help(
            "The belief/goal store must emit instances whose length matches \
             the axiom kind's arity. This event was malformed at the source."
        )
    )]
    ArityMismatch {
        kind: AxiomKind,
        expected: usize,
        actual: usize,
    },
}

// ---------------------------------------------------------------------------
// Plan handle errors
// ---------------------------------------------------------------------------

/// Errors from plan-handle allocation.
#[derive(Debug, Error, Diagnostic)]
pub enum PlanError {
    #[error("plan handle space exhausted: cannot allocate more than u64::MAX handles")]
    #[diagnostic(
        code(telos::plan::exhausted),
        help(
            "The handle space is exhausted. This is extremely unlikely in \
             practice (requires 2^64 allocations). If you see this error, \
             check for a handle allocation loop in the plan loader."
        )
    )]
    HandlesExhausted,
}

/// Convenience alias for functions returning telos results.
pub type TelosResult<T> = std::result::Result<T, TelosError>;
