//! Unification of compiled templates against ground axiom instances.
//!
//! This is deliberately *not* a general logic-programming unifier: all slots
//! are flat ground terms, so a single left-to-right pass suffices — no
//! backtracking, no occurs check, no nested terms. A bound slot requires
//! identity equality; a variable slot binds on first occurrence and
//! join-checks on every repeat. The first mismatch short-circuits.
//!
//! A failed unification is the expected, common outcome for most candidates
//! in a bucket. It is a control value (`None`), never an error, and is never
//! logged as an anomaly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::template::AxiomTemplate;
use crate::term::{GroundTerm, Term};

/// Variable bindings produced by one successful unification.
///
/// Keys are the variable names that actually appear in the matched template
/// (sigil included, e.g. `"?$1"`). Repeated occurrences of one name in a
/// template bind to a single term — the join constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingEnvironment {
    bindings: HashMap<String, GroundTerm>,
}

impl BindingEnvironment {
    /// The term bound to a variable, if any.
    pub fn get(&self, var: &str) -> Option<&GroundTerm> {
        self.bindings.get(var)
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no variables were bound (a fully ground template matched).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over `(variable, term)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroundTerm)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Unify a template against a ground instance.
///
/// Returns the accumulated [`BindingEnvironment`] on success, `None` on the
/// first mismatch. Linear in arity and deterministic: the same
/// `(template, instance)` pair always yields the same outcome.
///
/// Arity is pre-checked by construction ([`ChangeEvent::new`] validates the
/// instance, [`AxiomTemplate::compile`] validates the template), so a length
/// mismatch here can only mean the caller paired a template with an instance
/// of a different kind — treated as no match.
///
/// [`ChangeEvent::new`]: crate::event::ChangeEvent::new
pub fn unify(template: &AxiomTemplate, instance: &[GroundTerm]) -> Option<BindingEnvironment> {
    if template.len() != instance.len() {
        debug_assert!(false, "template/instance arity diverged");
        return None;
    }

    // HashMap::new() does not allocate; a failure before the first variable
    // binding leaves this path allocation-free.
    let mut bindings: HashMap<String, GroundTerm> = HashMap::new();

    for (slot, actual) in template.slots().iter().zip(instance) {
        match slot {
            Term::Bound(expected) => {
                if expected != actual {
                    return None;
                }
            }
            Term::Var(name) => match bindings.get(name) {
                Some(bound) => {
                    if bound != actual {
                        return None;
                    }
                }
                None => {
                    bindings.insert(name.clone(), actual.clone());
                }
            },
        }
    }

    Some(BindingEnvironment { bindings })
}
