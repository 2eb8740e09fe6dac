//! Link-order resolution for a unit's declared static dependencies.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::visit::linearize;
use crate::cycle::StaticCycle;
use crate::view::{DependencyView, EdgeKinds};
use crate::UnitId;

/// An ordered result together with the cycles met while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Units in link order, dependents first.
    pub order: Vec<UnitId>,
    /// Static cycles whose closing edge was dropped during the walk.
    pub cycles: Vec<StaticCycle>,
}

impl Resolution {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Merges every unit's declared static order into one linker order.
///
/// The merge works like a class-hierarchy linearizer: the unit's own list
/// and, recursively, each dependency's list are scanned last entry first,
/// units are placed after all of their children, and the placement sequence
/// is reversed. A unit's archive therefore always precedes the archives it
/// pulls symbols from, and where no edge forces an order the declared order
/// is kept.
///
/// Each call owns its visit state, so resolutions for different units are
/// independent and may run on separate threads against the same view.
pub struct OrderMerger<'v, V: ?Sized> {
    view: &'v V,
}

impl<'v, V> OrderMerger<'v, V>
where
    V: DependencyView + ?Sized,
{
    pub fn new(view: &'v V) -> Self {
        Self { view }
    }

    /// Link order for `unit`.
    ///
    /// Contains exactly the distinct entries of `unit`'s declared static
    /// dependencies, reordered so that no archive precedes one that depends
    /// on it. Transitive dependencies influence the order but are never added.
    pub fn resolve(&self, unit: &UnitId) -> Vec<UnitId> {
        self.resolve_detailed(unit).order
    }

    /// Same as [`resolve`](Self::resolve), also returning detected cycles.
    ///
    /// Cycles are returned, not reported; callers decide how loud to be.
    pub fn resolve_detailed(&self, unit: &UnitId) -> Resolution {
        let full = self.linearize(unit);

        let declared: FxHashSet<&UnitId> = self.view.static_deps(unit).iter().collect();
        let order: Vec<UnitId> = full
            .order
            .into_iter()
            .filter(|dep| declared.contains(dep))
            .collect();

        debug!(
            unit = %unit,
            declared = declared.len(),
            ordered = order.len(),
            "resolved static link order"
        );

        Resolution {
            order,
            cycles: full.cycles,
        }
    }

    /// Full transitive static order for `unit`: every archive reachable
    /// through static edges, dependents first.
    pub fn linearize(&self, unit: &UnitId) -> Resolution {
        let result = linearize(self.view, unit, EdgeKinds::Static);

        for cycle in &result.cycles {
            debug!(
                unit = %unit,
                cycle = %cycle.format_chain(),
                "static dependency cycle; link order inside the cycle is not guaranteed"
            );
        }

        Resolution {
            order: result.order,
            cycles: result.cycles,
        }
    }
}
