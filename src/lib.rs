//! # telos
//!
//! The plan-trigger matching core of a BDI agent. Plans declare, ahead of
//! time, the *shape* of belief/goal changes that should activate them — a
//! parameterized ontology-axiom pattern plus the kind of change that fires
//! it. Every store mutation arrives as a [`ChangeEvent`]; the engine finds
//! the declared patterns that match and produces the variable bindings each
//! activated plan receives.
//!
//! ## Architecture
//!
//! - **Template compiler** (`template`): raw patterns → validated, immutable
//!   [`AxiomTemplate`]s, once per declaration
//! - **Trigger registry** (`registry`): declarations bucketed by
//!   (store, change, axiom kind); two-phase Open → Sealed, read-only and
//!   `Arc`-shareable after sealing
//! - **Unifier** (`unify`): single-pass matching of flat ground terms with
//!   join constraints for repeated variables
//! - **Dispatcher** (`dispatch`) and **selector** (`select`): per-event
//!   candidate lookup, unification, and deterministic specificity ranking
//! - **Engine facade** (`engine`): [`MatchEngine`], the reasoning cycle's
//!   sole entry point
//!
//! The belief/goal store, plan bodies, and the agent lifecycle are external
//! collaborators — this crate only matches.
//!
//! ## Library usage
//!
//! ```
//! use std::sync::Arc;
//! use telos::axiom::AxiomKind;
//! use telos::engine::MatchEngine;
//! use telos::event::{ChangeEvent, ChangeKind, StoreKind};
//! use telos::plan::PlanHandle;
//! use telos::registry::{TriggerDeclaration, TriggerRegistry};
//! use telos::template::AxiomTemplate;
//! use telos::term::GroundTerm;
//!
//! let template = AxiomTemplate::compile(AxiomKind::HasKey, &["agentA", "?$2", "valueX"])?;
//! let mut registry = TriggerRegistry::new();
//! registry.register(TriggerDeclaration::new(
//!     template,
//!     StoreKind::Belief,
//!     ChangeKind::Added,
//!     PlanHandle::new(1).unwrap(),
//! ))?;
//! registry.seal()?;
//!
//! let engine = MatchEngine::new(Arc::new(registry))?;
//! let event = ChangeEvent::new(
//!     StoreKind::Belief,
//!     ChangeKind::Added,
//!     AxiomKind::HasKey,
//!     vec![
//!         GroundTerm::new("agentA"),
//!         GroundTerm::new("key001"),
//!         GroundTerm::new("valueX"),
//!     ],
//!     0,
//! )?;
//!
//! let ranked = engine.dispatch(&event)?;
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].bindings.get("?$2").unwrap().as_str(), "key001");
//! # Ok::<(), telos::error::TelosError>(())
//! ```
//!
//! [`ChangeEvent`]: event::ChangeEvent
//! [`AxiomTemplate`]: template::AxiomTemplate
//! [`MatchEngine`]: engine::MatchEngine

pub mod axiom;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod event;
pub mod plan;
pub mod registry;
pub mod select;
pub mod template;
pub mod term;
pub mod unify;
