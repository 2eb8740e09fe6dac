//! Static dependency cycle diagnostics.
//!
//! Cycles among static archives never stop resolution: the first visit to a
//! unit wins and re-entrant edges are dropped. The order produced inside a
//! cycle is deterministic but may not satisfy a single-pass linker, so these
//! types exist to surface the situation as a warning.

use serde::{Deserialize, Serialize};

use super::UnitId;

/// One static cycle found while resolving a unit.
///
/// `path` starts at the unit the re-entrant edge points to and ends with the
/// same unit again, e.g. `a -> b -> c -> a`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaticCycle {
    pub path: Vec<UnitId>,
}

impl StaticCycle {
    pub fn new(path: Vec<UnitId>) -> Self {
        Self { path }
    }

    /// Distinct units taking part in the cycle, in path order.
    pub fn members(&self) -> &[UnitId] {
        match self.path.split_last() {
            Some((_, rest)) if !rest.is_empty() => rest,
            _ => &self.path,
        }
    }

    /// True for a unit that lists itself as a static dependency.
    pub fn is_self_dependency(&self) -> bool {
        self.members().len() == 1
    }

    pub fn contains(&self, unit: &UnitId) -> bool {
        self.path.contains(unit)
    }

    /// Format the cycle as a human-readable string.
    ///
    /// Example: "liba -> libb -> liba"
    pub fn format_chain(&self) -> String {
        self.path
            .iter()
            .map(UnitId::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// A strongly connected group of units joined by static edges.
///
/// Every member can reach every other member, so no order of the group
/// satisfies all of their declared requirements at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleGroup {
    /// Members in graph declaration order.
    pub members: Vec<UnitId>,
}

impl CycleGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, unit: &UnitId) -> bool {
        self.members.contains(unit)
    }
}
