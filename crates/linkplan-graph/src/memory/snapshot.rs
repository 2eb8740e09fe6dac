//! Frozen graph snapshots.

use std::sync::Arc;

use super::super::view::{DependencyView, SnapshotId};
use super::super::{LibraryUnit, UnitId};
use super::graph::{UnitGraph, UnitMap};

/// Immutable view of a [`UnitGraph`] at one point in time.
///
/// Cloning shares the frozen unit table. Every snapshot carries its own
/// [`SnapshotId`]; link plans computed from it stay valid for as long as
/// the snapshot is used.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    id: SnapshotId,
    units: Arc<UnitMap>,
}

impl GraphSnapshot {
    pub(super) fn freeze(units: UnitMap) -> Self {
        Self {
            id: SnapshotId::next(),
            units: Arc::new(units),
        }
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn unit(&self, id: &UnitId) -> Option<&LibraryUnit> {
        self.units.get(id)
    }

    /// Units in declaration order.
    pub fn units(&self) -> impl Iterator<Item = &LibraryUnit> {
        self.units.values()
    }

    pub fn unit_ids(&self) -> impl Iterator<Item = &UnitId> {
        self.units.keys()
    }

    /// Position of `id` in declaration order.
    pub fn index_of(&self, id: &UnitId) -> Option<usize> {
        self.units.get_index_of(id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl DependencyView for GraphSnapshot {
    fn static_deps(&self, unit: &UnitId) -> &[UnitId] {
        self.units
            .get(unit)
            .map(|u| u.static_deps.as_slice())
            .unwrap_or(&[])
    }

    fn shared_deps(&self, unit: &UnitId) -> &[UnitId] {
        self.units
            .get(unit)
            .map(|u| u.shared_deps.as_slice())
            .unwrap_or(&[])
    }

    fn contains(&self, unit: &UnitId) -> bool {
        self.units.contains_key(unit)
    }

    fn snapshot_id(&self) -> SnapshotId {
        self.id
    }
}

impl UnitGraph {
    /// Freeze the current state.
    ///
    /// Repeated calls without an intervening mutation return the same
    /// snapshot (same [`SnapshotId`]), so caches keyed by it stay warm.
    pub fn snapshot(&self) -> GraphSnapshot {
        if let Some(snapshot) = self.inner.read().snapshot.as_ref() {
            return snapshot.clone();
        }

        let mut inner = self.inner.write();
        if let Some(snapshot) = inner.snapshot.as_ref() {
            return snapshot.clone();
        }
        let snapshot = GraphSnapshot::freeze(inner.units.clone());
        inner.snapshot = Some(snapshot.clone());
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{ids, unit};
    use crate::{DependencyView, UnitGraph};

    #[test]
    fn snapshot_is_reused_until_mutation() {
        let graph = UnitGraph::from_units([unit("a", "b", "")]).unwrap();

        let first = graph.snapshot();
        let second = graph.snapshot();
        assert_eq!(first.id(), second.id());

        graph.add_unit(unit("b", "", "")).unwrap();
        let third = graph.snapshot();
        assert_ne!(first.id(), third.id());
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutations() {
        let graph = UnitGraph::from_units([unit("a", "b", ""), unit("b", "", "")]).unwrap();
        let before = graph.snapshot();

        graph.add_static_dep(&ids("a")[0], ids("c")[0].clone()).unwrap();

        assert_eq!(before.static_deps(&ids("a")[0]), ids("b").as_slice());
        assert_eq!(
            graph.snapshot().static_deps(&ids("a")[0]),
            ids("b,c").as_slice()
        );
    }

    #[test]
    fn unknown_units_are_leaves() {
        let snapshot = UnitGraph::new().snapshot();
        let missing = &ids("missing")[0];

        assert!(!snapshot.contains(missing));
        assert!(snapshot.static_deps(missing).is_empty());
        assert!(snapshot.shared_deps(missing).is_empty());
        assert!(snapshot.is_empty());
    }
}
