use serde::{Deserialize, Serialize};

/// Aggregate counts for a unit graph snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub unit_count: usize,
    /// Declared static edges, duplicates included.
    pub static_edge_count: usize,
    pub shared_edge_count: usize,
    /// Units no other unit depends on.
    pub root_count: usize,
    /// Units declaring no dependencies.
    pub leaf_count: usize,
    /// Units that belong to a static cycle group.
    pub cyclic_unit_count: usize,
}

impl GraphStatistics {
    pub fn new(
        unit_count: usize,
        static_edge_count: usize,
        shared_edge_count: usize,
        root_count: usize,
        leaf_count: usize,
        cyclic_unit_count: usize,
    ) -> Self {
        Self {
            unit_count,
            static_edge_count,
            shared_edge_count,
            root_count,
            leaf_count,
            cyclic_unit_count,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.static_edge_count + self.shared_edge_count
    }

    pub fn is_acyclic(&self) -> bool {
        self.cyclic_unit_count == 0
    }
}
