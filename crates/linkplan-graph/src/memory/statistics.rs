//! Statistics methods for snapshots.

use rustc_hash::FxHashSet;

use super::super::{GraphStatistics, LibraryUnit, UnitId};
use super::graph::UnitGraph;
use super::snapshot::GraphSnapshot;

impl GraphSnapshot {
    /// Compute a statistics snapshot for reports.
    pub fn statistics(&self) -> GraphStatistics {
        let referenced: FxHashSet<&UnitId> = self.units().flat_map(LibraryUnit::all_deps).collect();

        let static_edge_count = self.units().map(|u| u.static_deps.len()).sum();
        let shared_edge_count = self.units().map(|u| u.shared_deps.len()).sum();
        let root_count = self.unit_ids().filter(|id| !referenced.contains(id)).count();
        let leaf_count = self.units().filter(|u| u.is_leaf()).count();
        let cyclic_unit_count = self
            .static_cycle_groups()
            .iter()
            .map(|group| group.len())
            .sum();

        GraphStatistics::new(
            self.len(),
            static_edge_count,
            shared_edge_count,
            root_count,
            leaf_count,
            cyclic_unit_count,
        )
    }
}

impl UnitGraph {
    pub fn statistics(&self) -> GraphStatistics {
        self.snapshot().statistics()
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::view;

    #[test]
    fn counts_edges_roots_leaves_and_cycles() {
        let v = view("bin:lib2,lib1; lib1:lib2,liboptional; x:y; y:x", "bin:libc");
        let stats = v.statistics();

        assert_eq!(stats.unit_count, 7);
        assert_eq!(stats.static_edge_count, 6);
        assert_eq!(stats.shared_edge_count, 1);
        assert_eq!(stats.edge_count(), 7);
        assert_eq!(stats.root_count, 1);
        assert_eq!(stats.leaf_count, 3);
        assert_eq!(stats.cyclic_unit_count, 2);
        assert!(!stats.is_acyclic());
    }

    #[test]
    fn empty_graph_statistics() {
        let stats = view("", "").statistics();
        assert_eq!(stats.unit_count, 0);
        assert!(stats.is_acyclic());
    }
}
