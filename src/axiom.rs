//! Axiom kinds: the closed set of structural fact categories.
//!
//! Every axiom in the agent's world model belongs to one [`AxiomKind`], which
//! fixes its slot count (arity) and the meaning of each position. Arity is a
//! static dispatch table — a `match` on the enum — so template compilation and
//! event construction validate shape without any runtime type inspection.

use serde::{Deserialize, Serialize};

/// The structural category of an axiom.
///
/// Positional semantics per kind:
///
/// | kind                      | slot 0     | slot 1   | slot 2    |
/// |---------------------------|------------|----------|-----------|
/// | `ClassAssertion`          | individual | class    | —         |
/// | `ObjectPropertyAssertion` | subject    | property | object    |
/// | `DataPropertyAssertion`   | subject    | property | literal   |
/// | `SubClassOf`              | subclass   | superclass | —       |
/// | `HasKey`                  | class      | property | key value |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxiomKind {
    /// An individual is an instance of a class.
    ClassAssertion,
    /// An individual relates to another individual.
    ObjectPropertyAssertion,
    /// An individual carries a literal value.
    DataPropertyAssertion,
    /// One class subsumes another.
    SubClassOf,
    /// A class is keyed by a property/value pair.
    HasKey,
}

impl AxiomKind {
    /// Every kind, in declaration order. Useful for exhaustive validation.
    pub const ALL: [AxiomKind; 5] = [
        AxiomKind::ClassAssertion,
        AxiomKind::ObjectPropertyAssertion,
        AxiomKind::DataPropertyAssertion,
        AxiomKind::SubClassOf,
        AxiomKind::HasKey,
    ];

    /// Number of slots an axiom of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            AxiomKind::ClassAssertion | AxiomKind::SubClassOf => 2,
            AxiomKind::ObjectPropertyAssertion
            | AxiomKind::DataPropertyAssertion
            | AxiomKind::HasKey => 3,
        }
    }
}

impl std::fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AxiomKind::ClassAssertion => "ClassAssertion",
            AxiomKind::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            AxiomKind::DataPropertyAssertion => "DataPropertyAssertion",
            AxiomKind::SubClassOf => "SubClassOf",
            AxiomKind::HasKey => "HasKey",
        };
        f.write_str(name)
    }
}
