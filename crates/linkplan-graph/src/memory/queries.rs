//! Query and validation methods for UnitGraph.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::super::{DependencyKind, GraphError, LibraryUnit, Result, UnitId};
use super::graph::UnitGraph;

/// A dependency reference to a unit the graph does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingReference {
    pub unit: UnitId,
    pub dependency: UnitId,
    pub kind: DependencyKind,
}

impl UnitGraph {
    /// Get a unit declaration by id.
    pub fn unit(&self, id: &UnitId) -> Option<LibraryUnit> {
        self.inner.read().units.get(id).cloned()
    }

    pub fn contains(&self, id: &UnitId) -> bool {
        self.inner.read().units.contains_key(id)
    }

    /// All units in declaration order.
    pub fn units(&self) -> Vec<LibraryUnit> {
        self.inner.read().units.values().cloned().collect()
    }

    pub fn unit_ids(&self) -> Vec<UnitId> {
        self.inner.read().units.keys().cloned().collect()
    }

    pub fn unit_count(&self) -> usize {
        self.inner.read().units.len()
    }

    /// Number of mutations applied since creation.
    pub fn generation(&self) -> u64 {
        self.inner.read().generation
    }

    /// Units that declare `id` as a static or shared dependency, in
    /// declaration order.
    pub fn dependents(&self, id: &UnitId) -> Vec<UnitId> {
        self.inner
            .read()
            .units
            .values()
            .filter(|unit| unit.all_deps().any(|dep| dep == id))
            .map(|unit| unit.id.clone())
            .collect()
    }

    /// Units no other unit depends on (binaries and top-level libraries).
    pub fn roots(&self) -> Vec<UnitId> {
        let inner = self.inner.read();
        let referenced: FxHashSet<&UnitId> =
            inner.units.values().flat_map(LibraryUnit::all_deps).collect();

        inner
            .units
            .keys()
            .filter(|id| !referenced.contains(id))
            .cloned()
            .collect()
    }

    /// Every reference to an undeclared unit, in declaration order.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let inner = self.inner.read();
        let mut dangling = Vec::new();

        for unit in inner.units.values() {
            for (kind, dep) in unit.edges() {
                if !inner.units.contains_key(dep) {
                    dangling.push(DanglingReference {
                        unit: unit.id.clone(),
                        dependency: dep.clone(),
                        kind,
                    });
                }
            }
        }

        dangling
    }

    /// Check that every referenced unit is declared.
    ///
    /// The ordering algorithms tolerate unknown units (they behave as
    /// leaves), but callers that build graphs from user input should reject
    /// them before planning links.
    pub fn validate(&self) -> Result<()> {
        match self.dangling_references().into_iter().next() {
            Some(first) => Err(GraphError::UnknownDependency {
                unit: first.unit,
                dependency: first.dependency,
                kind: first.kind,
            }),
            None => Ok(()),
        }
    }
}
