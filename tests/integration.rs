//! End-to-end integration tests for the telos matching engine.
//!
//! These exercise the full pipeline — template compilation, registration,
//! sealing, dispatch, and selection — the way an agent lifecycle drives it,
//! including cross-thread sharing of a sealed registry.

use std::sync::Arc;

use telos::axiom::AxiomKind;
use telos::engine::MatchEngine;
use telos::error::{RegistryError, TelosError};
use telos::event::{ChangeEvent, ChangeKind, StoreKind};
use telos::plan::{PlanHandle, PlanHandleAllocator};
use telos::registry::{TriggerDeclaration, TriggerRegistry};
use telos::template::AxiomTemplate;
use telos::term::GroundTerm;

fn terms(ids: &[&str]) -> Vec<GroundTerm> {
    ids.iter().map(|s| GroundTerm::new(*s)).collect()
}

fn has_key_trigger(specs: &[&str], change: ChangeKind, plan: PlanHandle) -> TriggerDeclaration {
    TriggerDeclaration::new(
        AxiomTemplate::compile(AxiomKind::HasKey, specs).unwrap(),
        StoreKind::Belief,
        change,
        plan,
    )
}

fn added_belief_has_key(instance: &[&str]) -> ChangeEvent {
    ChangeEvent::new(
        StoreKind::Belief,
        ChangeKind::Added,
        AxiomKind::HasKey,
        terms(instance),
        1_700_000_000,
    )
    .unwrap()
}

/// Catch-all pattern binds every slot with specificity 0.
#[test]
fn catch_all_pattern_binds_all_slots() {
    let alloc = PlanHandleAllocator::new();
    let mut reg = TriggerRegistry::new();
    reg.register(has_key_trigger(
        &["?$1", "?$2", "?$3"],
        ChangeKind::Added,
        alloc.next_handle().unwrap(),
    ))
    .unwrap();
    reg.seal().unwrap();

    let engine = MatchEngine::new(Arc::new(reg)).unwrap();
    let ranked = engine
        .dispatch(&added_belief_has_key(&["agentA", "key001", "valueX"]))
        .unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].specificity, 0);
    assert_eq!(ranked[0].bindings.get("?$1").unwrap().as_str(), "agentA");
    assert_eq!(ranked[0].bindings.get("?$2").unwrap().as_str(), "key001");
    assert_eq!(ranked[0].bindings.get("?$3").unwrap().as_str(), "valueX");
}

/// A more specific pattern matches with fewer bindings and outranks the
/// catch-all for the same event.
#[test]
fn specific_pattern_outranks_catch_all() {
    let mut reg = TriggerRegistry::new();
    reg.register(has_key_trigger(
        &["?$1", "?$2", "?$3"],
        ChangeKind::Added,
        PlanHandle::new(1).unwrap(),
    ))
    .unwrap();
    reg.register(has_key_trigger(
        &["agentA", "?$2", "valueX"],
        ChangeKind::Added,
        PlanHandle::new(2).unwrap(),
    ))
    .unwrap();
    reg.seal().unwrap();

    let engine = MatchEngine::new(Arc::new(reg)).unwrap();
    let ranked = engine
        .dispatch(&added_belief_has_key(&["agentA", "key001", "valueX"]))
        .unwrap();

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].plan.get(), 2);
    assert_eq!(ranked[0].specificity, 2);
    assert_eq!(ranked[0].bindings.len(), 1);
    assert_eq!(ranked[0].bindings.get("?$2").unwrap().as_str(), "key001");
    assert_eq!(ranked[1].plan.get(), 1);
    assert_eq!(ranked[1].specificity, 0);
}

/// A fixed-slot mismatch produces no result at all.
#[test]
fn mismatched_fixed_slot_produces_no_result() {
    let mut reg = TriggerRegistry::new();
    reg.register(has_key_trigger(
        &["agentB", "?$2", "valueX"],
        ChangeKind::Added,
        PlanHandle::new(1).unwrap(),
    ))
    .unwrap();
    reg.seal().unwrap();

    let engine = MatchEngine::new(Arc::new(reg)).unwrap();
    let ranked = engine
        .dispatch(&added_belief_has_key(&["agentA", "key001", "valueX"]))
        .unwrap();
    assert!(ranked.is_empty());
}

/// A Removed trigger is never attempted against an Added event: the bucket
/// lookup itself comes back empty.
#[test]
fn change_kind_indexing_short_circuits() {
    let mut reg = TriggerRegistry::new();
    reg.register(has_key_trigger(
        &["?$1", "?$2", "?$3"],
        ChangeKind::Removed,
        PlanHandle::new(1).unwrap(),
    ))
    .unwrap();
    reg.seal().unwrap();

    let event = added_belief_has_key(&["agentA", "key001", "valueX"]);
    assert!(reg.candidates_for(event.key()).unwrap().is_empty());

    let engine = MatchEngine::new(Arc::new(reg)).unwrap();
    assert!(engine.dispatch(&event).unwrap().is_empty());
}

/// A bad arity fails at compile time and a subsequent valid registration
/// still succeeds — failed declarations never corrupt the registry.
#[test]
fn bad_template_does_not_poison_registry() {
    let bad = AxiomTemplate::compile(AxiomKind::HasKey, &["?$1", "?$2"]);
    assert!(bad.is_err());

    let mut reg = TriggerRegistry::new();
    reg.register(has_key_trigger(
        &["?$1", "?$2", "?$3"],
        ChangeKind::Added,
        PlanHandle::new(1).unwrap(),
    ))
    .unwrap();
    reg.seal().unwrap();
    assert_eq!(reg.len(), 1);
}

/// Equal-specificity matches come back in registration order.
#[test]
fn equal_specificity_ties_break_by_registration_order() {
    let mut reg = TriggerRegistry::new();
    reg.register(has_key_trigger(
        &["agentA", "?$2", "?$3"],
        ChangeKind::Added,
        PlanHandle::new(1).unwrap(),
    ))
    .unwrap();
    reg.register(has_key_trigger(
        &["?$1", "key001", "?$3"],
        ChangeKind::Added,
        PlanHandle::new(2).unwrap(),
    ))
    .unwrap();
    reg.seal().unwrap();

    let engine = MatchEngine::new(Arc::new(reg)).unwrap();
    let ranked = engine
        .dispatch(&added_belief_has_key(&["agentA", "key001", "valueX"]))
        .unwrap();

    let plans: Vec<u64> = ranked.iter().map(|m| m.plan.get()).collect();
    assert_eq!(plans, vec![1, 2]);
}

/// Repeated dispatch of the same event yields identical ordered results.
#[test]
fn dispatch_is_deterministic() {
    let mut reg = TriggerRegistry::new();
    for (i, specs) in [
        ["?$1", "?$2", "?$3"],
        ["agentA", "?$2", "?$3"],
        ["agentA", "key001", "?$3"],
        ["?$1", "?$2", "valueX"],
    ]
    .iter()
    .enumerate()
    {
        reg.register(has_key_trigger(
            specs,
            ChangeKind::Added,
            PlanHandle::new(i as u64 + 1).unwrap(),
        ))
        .unwrap();
    }
    reg.seal().unwrap();

    let engine = MatchEngine::new(Arc::new(reg)).unwrap();
    let event = added_belief_has_key(&["agentA", "key001", "valueX"]);

    let first = engine.dispatch(&event).unwrap();
    for _ in 0..10 {
        assert_eq!(engine.dispatch(&event).unwrap(), first);
    }
}

/// Phase safety in both directions.
#[test]
fn phase_violations_surface_immediately() {
    let mut reg = TriggerRegistry::new();

    // Lookup before sealing.
    let event = added_belief_has_key(&["agentA", "key001", "valueX"]);
    assert!(matches!(
        reg.candidates_for(event.key()).unwrap_err(),
        TelosError::Registry(RegistryError::NotReady)
    ));

    // Registration after sealing.
    reg.seal().unwrap();
    assert!(matches!(
        reg.register(has_key_trigger(
            &["?$1", "?$2", "?$3"],
            ChangeKind::Added,
            PlanHandle::new(1).unwrap(),
        ))
        .unwrap_err(),
        TelosError::Registry(RegistryError::Closed)
    ));
}

/// Belief triggers never fire on goal events and vice versa, even for the
/// same axiom kind and change kind.
#[test]
fn belief_and_goal_stores_are_distinct() {
    let template = AxiomTemplate::compile(AxiomKind::ClassAssertion, &["?$1", "?$2"]).unwrap();
    let mut reg = TriggerRegistry::new();
    reg.register(TriggerDeclaration::new(
        template,
        StoreKind::Goal,
        ChangeKind::Removed,
        PlanHandle::new(1).unwrap(),
    ))
    .unwrap();
    reg.seal().unwrap();

    let engine = MatchEngine::new(Arc::new(reg)).unwrap();

    let goal_event = ChangeEvent::new(
        StoreKind::Goal,
        ChangeKind::Removed,
        AxiomKind::ClassAssertion,
        terms(&["agentA", "Courier"]),
        0,
    )
    .unwrap();
    let belief_event = ChangeEvent::new(
        StoreKind::Belief,
        ChangeKind::Removed,
        AxiomKind::ClassAssertion,
        terms(&["agentA", "Courier"]),
        0,
    )
    .unwrap();

    assert_eq!(engine.dispatch(&goal_event).unwrap().len(), 1);
    assert!(engine.dispatch(&belief_event).unwrap().is_empty());
}

/// Multiple agent threads sharing one sealed registry observe identical
/// ranked results — the post-seal registry is read-only.
#[test]
fn sealed_registry_is_shareable_across_threads() {
    let mut reg = TriggerRegistry::new();
    for (i, specs) in [["?$1", "?$2", "?$3"], ["agentA", "?$2", "valueX"]]
        .iter()
        .enumerate()
    {
        reg.register(has_key_trigger(
            specs,
            ChangeKind::Added,
            PlanHandle::new(i as u64 + 1).unwrap(),
        ))
        .unwrap();
    }
    reg.seal().unwrap();

    let shared = Arc::new(reg);
    let baseline = MatchEngine::new(Arc::clone(&shared))
        .unwrap()
        .dispatch(&added_belief_has_key(&["agentA", "key001", "valueX"]))
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&shared);
            std::thread::spawn(move || {
                let engine = MatchEngine::new(registry).unwrap();
                let event = added_belief_has_key(&["agentA", "key001", "valueX"]);
                (0..100)
                    .map(|_| engine.dispatch(&event).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for result in handle.join().unwrap() {
            assert_eq!(result, baseline);
        }
    }
}

/// The data model serializes: a match result can be handed to tooling as JSON.
#[test]
fn match_results_serialize_to_json() {
    let mut reg = TriggerRegistry::new();
    reg.register(has_key_trigger(
        &["agentA", "?$2", "valueX"],
        ChangeKind::Added,
        PlanHandle::new(1).unwrap(),
    ))
    .unwrap();
    reg.seal().unwrap();

    let engine = MatchEngine::new(Arc::new(reg)).unwrap();
    let ranked = engine
        .dispatch(&added_belief_has_key(&["agentA", "key001", "valueX"]))
        .unwrap();

    let json = serde_json::to_value(&ranked[0]).unwrap();
    assert_eq!(json["specificity"], 2);
    assert_eq!(json["bindings"]["?$2"], "key001");
}
