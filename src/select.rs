//! Plan selector: deterministic ranking of successful matches.
//!
//! Matches are ordered descending by specificity — a plan written for an
//! exact fact outranks a generic catch-all. Ties keep their input order,
//! which the dispatcher guarantees is registration order, so the full
//! ordering is deterministic and explainable: (specificity desc,
//! registration order).

use crate::dispatch::MatchResult;

/// Rank matches for the reasoning cycle.
///
/// Stable sort by specificity only; the input order (registration order)
/// breaks ties. The reasoning cycle decides how many of the top-ranked
/// results to actually activate.
pub fn select(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.specificity.cmp(&a.specificity));
    results
}
