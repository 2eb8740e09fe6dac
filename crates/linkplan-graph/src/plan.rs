//! Computed link plans.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::cycle::StaticCycle;
use super::order::{ClosureWalker, OrderMerger};
use super::view::DependencyView;
use super::UnitId;

/// Link data for one unit, consumed by the linker-invocation builder.
///
/// Immutable once computed; valid for the snapshot it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPlan {
    pub unit: UnitId,
    /// Static archives to pass to the linker, dependents first.
    pub out_ordered: Vec<UnitId>,
    /// Every unit reachable through static or shared edges.
    pub all_ordered: Vec<UnitId>,
    /// Static cycles met while ordering `out_ordered`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cycles: Vec<StaticCycle>,
}

impl LinkPlan {
    /// Compute the plan for `unit` against `view`.
    pub fn compute<V>(view: &V, unit: &UnitId) -> Self
    where
        V: DependencyView + ?Sized,
    {
        let resolution = OrderMerger::new(view).resolve_detailed(unit);
        let all_ordered = ClosureWalker::new(view).closure(unit);

        Self {
            unit: unit.clone(),
            out_ordered: resolution.order,
            all_ordered,
            cycles: resolution.cycles,
        }
    }

    /// True when ordering met no static cycle, so `out_ordered` satisfies
    /// every declared requirement.
    pub fn is_acyclic(&self) -> bool {
        self.cycles.is_empty()
    }

    /// Units tracked for validation but not passed to the linker.
    pub fn closure_only(&self) -> impl Iterator<Item = &UnitId> {
        let linked: FxHashSet<&UnitId> = self.out_ordered.iter().collect();
        self.all_ordered
            .iter()
            .filter(move |id| !linked.contains(id))
    }

    /// Format the link order as a space-separated archive list.
    pub fn format_link_line(&self) -> String {
        self.out_ordered
            .iter()
            .map(UnitId::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
