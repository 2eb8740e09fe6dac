//! Mutation methods for UnitGraph.
//!
//! Every successful mutation bumps the graph generation and invalidates the
//! cached snapshot, so plans computed before the change are never served for
//! the new state.

use super::super::{GraphError, LibraryUnit, Result, UnitId};
use super::graph::UnitGraph;

impl UnitGraph {
    /// Add a unit. Fails if a unit with the same id is already declared.
    pub fn add_unit(&self, unit: LibraryUnit) -> Result<()> {
        let mut inner = self.inner.write();
        if inner.units.contains_key(&unit.id) {
            return Err(GraphError::DuplicateUnit(unit.id));
        }
        inner.units.insert(unit.id.clone(), unit);
        inner.touch();
        Ok(())
    }

    /// Insert or replace a unit, keeping its original declaration position.
    ///
    /// Returns the previous declaration if there was one.
    pub fn replace_unit(&self, unit: LibraryUnit) -> Option<LibraryUnit> {
        let mut inner = self.inner.write();
        let previous = inner.units.insert(unit.id.clone(), unit);
        inner.touch();
        previous
    }

    /// Append a static dependency to `from`'s declared list.
    pub fn add_static_dep(&self, from: &UnitId, to: UnitId) -> Result<()> {
        let mut inner = self.inner.write();
        let unit = inner
            .units
            .get_mut(from)
            .ok_or_else(|| GraphError::UnknownUnit(from.clone()))?;
        unit.static_deps.push(to);
        inner.touch();
        Ok(())
    }

    /// Append a shared dependency to `from`'s declared list.
    pub fn add_shared_dep(&self, from: &UnitId, to: UnitId) -> Result<()> {
        let mut inner = self.inner.write();
        let unit = inner
            .units
            .get_mut(from)
            .ok_or_else(|| GraphError::UnknownUnit(from.clone()))?;
        unit.shared_deps.push(to);
        inner.touch();
        Ok(())
    }

    /// Remove a unit. References to it from other units are left in place.
    pub fn remove_unit(&self, id: &UnitId) -> Result<LibraryUnit> {
        let mut inner = self.inner.write();
        let removed = inner
            .units
            .shift_remove(id)
            .ok_or_else(|| GraphError::UnknownUnit(id.clone()))?;
        inner.touch();
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{ids, unit};
    use crate::{GraphError, UnitGraph};

    #[test]
    fn duplicate_unit_is_rejected() {
        let graph = UnitGraph::new();
        graph.add_unit(unit("a", "", "")).unwrap();

        let err = graph.add_unit(unit("a", "b", "")).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateUnit(id) if id.as_str() == "a"));
        assert_eq!(graph.generation(), 1);
    }

    #[test]
    fn replace_keeps_declaration_position() {
        let graph = UnitGraph::from_units([unit("a", "", ""), unit("b", "", "")]).unwrap();

        let previous = graph.replace_unit(unit("a", "b", ""));
        assert!(previous.is_some());
        assert_eq!(graph.unit_ids(), ids("a,b"));
        assert_eq!(graph.unit(&ids("a")[0]).unwrap().static_deps, ids("b"));
    }

    #[test]
    fn edges_append_in_order() {
        let graph = UnitGraph::from_units([unit("a", "", "")]).unwrap();
        let a = &ids("a")[0];

        graph.add_static_dep(a, ids("c")[0].clone()).unwrap();
        graph.add_static_dep(a, ids("b")[0].clone()).unwrap();
        graph.add_shared_dep(a, ids("d")[0].clone()).unwrap();

        let declared = graph.unit(a).unwrap();
        assert_eq!(declared.static_deps, ids("c,b"));
        assert_eq!(declared.shared_deps, ids("d"));
    }

    #[test]
    fn edge_on_unknown_unit_fails() {
        let graph = UnitGraph::new();
        let err = graph
            .add_static_dep(&ids("ghost")[0], ids("b")[0].clone())
            .unwrap_err();
        assert!(matches!(err, GraphError::UnknownUnit(_)));
    }

    #[test]
    fn remove_unit_bumps_generation() {
        let graph = UnitGraph::from_units([unit("a", "", ""), unit("b", "a", "")]).unwrap();
        let before = graph.generation();

        let removed = graph.remove_unit(&ids("a")[0]).unwrap();
        assert_eq!(removed.id, ids("a")[0]);
        assert!(graph.generation() > before);
        assert_eq!(graph.unit_ids(), ids("b"));
        assert!(graph.remove_unit(&ids("a")[0]).is_err());
    }
}
