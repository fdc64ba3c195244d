//! Event dispatcher: classify one change event and unify its candidates.
//!
//! `dispatch` is a pure function of (sealed registry, event): it looks up the
//! event's bucket, attempts unification against each candidate in
//! registration order, and collects a [`MatchResult`] per success. No state
//! is carried between events and the registry is never touched.

use serde::Serialize;
use tracing::trace;

use crate::error::TelosResult;
use crate::event::ChangeEvent;
use crate::plan::PlanHandle;
use crate::registry::TriggerRegistry;
use crate::unify::{BindingEnvironment, unify};

/// One successful trigger match, ready for plan selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// The plan the matched trigger targets.
    pub plan: PlanHandle,
    /// Variable bindings the plan receives as its invocation context.
    pub bindings: BindingEnvironment,
    /// Number of fixed slots in the matched template; higher = more specific.
    pub specificity: usize,
}

/// Run one event against the registry, producing matches in bucket
/// (= registration) order.
///
/// Fails with [`RegistryError::NotReady`] if the registry is still open.
/// A candidate that does not unify simply produces no result.
///
/// [`RegistryError::NotReady`]: crate::error::RegistryError::NotReady
pub fn dispatch(registry: &TriggerRegistry, event: &ChangeEvent) -> TelosResult<Vec<MatchResult>> {
    let key = event.key();
    let candidates = registry.candidates_for(key)?;

    let mut matches = Vec::new();
    for decl in candidates {
        if let Some(bindings) = unify(&decl.template, event.instance()) {
            matches.push(MatchResult {
                plan: decl.plan,
                bindings,
                specificity: decl.template.specificity(),
            });
        }
    }

    trace!(
        %key,
        candidates = candidates.len(),
        matched = matches.len(),
        "dispatched change event"
    );
    Ok(matches)
}
