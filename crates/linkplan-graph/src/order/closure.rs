//! Transitive closure over static and shared edges.

use rustc_hash::FxHashSet;

use super::visit::linearize;
use crate::view::{DependencyView, EdgeKinds};
use crate::UnitId;

/// Computes the set of every unit reachable from a unit through any mix of
/// static and shared edges.
///
/// Used for completeness and availability checks, never for the linker
/// command line. The order is deterministic: the same linearization as the
/// link order, with shared edges following static edges in each unit's list.
pub struct ClosureWalker<'v, V: ?Sized> {
    view: &'v V,
}

impl<'v, V> ClosureWalker<'v, V>
where
    V: DependencyView + ?Sized,
{
    pub fn new(view: &'v V) -> Self {
        Self { view }
    }

    /// Every unit reachable from `unit`, each reported once.
    ///
    /// Cycles through shared edges are legal for dynamic linking and are not
    /// reported here.
    pub fn closure(&self, unit: &UnitId) -> Vec<UnitId> {
        linearize(self.view, unit, EdgeKinds::StaticAndShared).order
    }

    /// Units reachable from `unit` through static edges alone.
    pub fn static_reachable(&self, unit: &UnitId) -> FxHashSet<UnitId> {
        let mut seen = FxHashSet::default();
        let mut pending: Vec<&UnitId> = self.view.static_deps(unit).iter().collect();

        while let Some(next) = pending.pop() {
            if seen.insert(next.clone()) {
                pending.extend(self.view.static_deps(next).iter());
            }
        }

        seen
    }

    /// Units in the closure that can only be reached through at least one
    /// shared edge. Their own static dependencies are linked into the shared
    /// object that owns them, not into `unit`.
    pub fn shared_only(&self, unit: &UnitId) -> Vec<UnitId> {
        let statically = self.static_reachable(unit);
        self.closure(unit)
            .into_iter()
            .filter(|dep| !statically.contains(dep))
            .collect()
    }
}
