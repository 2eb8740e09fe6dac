//! Whole-graph static cycle detection for snapshots.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;

use super::super::cycle::CycleGroup;
use super::super::UnitId;
use super::graph::UnitGraph;
use super::snapshot::GraphSnapshot;

impl GraphSnapshot {
    /// Groups of units joined into cycles by static edges.
    ///
    /// Includes single units that list themselves. Members of each group are
    /// in declaration order and groups are ordered by their first member.
    /// Edges to undeclared units are ignored.
    pub fn static_cycle_groups(&self) -> Vec<CycleGroup> {
        let mut graph: DiGraph<UnitId, ()> = DiGraph::with_capacity(self.len(), 0);
        let mut nodes: FxHashMap<&UnitId, NodeIndex> = FxHashMap::default();

        for id in self.unit_ids() {
            nodes.insert(id, graph.add_node(id.clone()));
        }
        for unit in self.units() {
            let Some(&from) = nodes.get(&unit.id) else {
                continue;
            };
            for dep in &unit.static_deps {
                if let Some(&to) = nodes.get(dep) {
                    graph.update_edge(from, to, ());
                }
            }
        }

        let mut groups: Vec<CycleGroup> = tarjan_scc(&graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&n| graph.find_edge(n, n).is_some())
            })
            .map(|mut component| {
                // NodeIndex follows insertion, which is declaration order.
                component.sort_unstable();
                CycleGroup {
                    members: component.into_iter().map(|n| graph[n].clone()).collect(),
                }
            })
            .collect();

        groups.sort_by_key(|group| {
            group
                .members
                .first()
                .and_then(|id| self.index_of(id))
                .unwrap_or(usize::MAX)
        });
        groups
    }
}

impl UnitGraph {
    /// Static cycle groups of the current state.
    pub fn static_cycle_groups(&self) -> Vec<CycleGroup> {
        self.snapshot().static_cycle_groups()
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{ids, view};

    #[test]
    fn acyclic_graph_has_no_groups() {
        let v = view("a:d,b,c; b:d; c:d; d:", "");
        assert!(v.static_cycle_groups().is_empty());
    }

    #[test]
    fn finds_three_cycle_and_self_loop() {
        let v = view("x:x; a:b; b:c; c:a; d:a", "");
        let groups = v.static_cycle_groups();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].members, ids("x"));
        assert_eq!(groups[1].members, ids("a,b,c"));
    }

    #[test]
    fn shared_edges_do_not_form_static_cycles() {
        let v = view("a:b", "b:a");
        assert!(v.static_cycle_groups().is_empty());
    }

    #[test]
    fn unit_reaching_cycle_through_cross_edge_is_included() {
        // v reaches x only through a cross edge; it still belongs to the group.
        let v = view("r:x,v; x:r; v:x", "");
        let groups = v.static_cycle_groups();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].members, ids("r,x,v"));
    }
}
