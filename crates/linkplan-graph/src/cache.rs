//! Per-snapshot memoization of link plans.
//!
//! The same library is asked for its plan once per binary that transitively
//! depends on it. [`PlanCache`] computes each plan at most once for a given
//! snapshot and hands out shared, immutable results; callers racing on the
//! same unit block on the single in-flight computation instead of
//! duplicating it.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use once_cell::sync::OnceCell;
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;
use tracing::debug;

use super::plan::LinkPlan;
use super::view::{DependencyView, SnapshotId};
use super::UnitId;

type PlanSlot = Arc<OnceCell<Arc<LinkPlan>>>;

/// Link plans for one snapshot, computed lazily.
pub struct PlanCache {
    snapshot: SnapshotId,
    plans: DashMap<UnitId, PlanSlot, FxBuildHasher>,
    computed: AtomicUsize,
}

impl PlanCache {
    /// Create an empty cache bound to `snapshot`.
    pub fn new(snapshot: SnapshotId) -> Self {
        Self {
            snapshot,
            plans: DashMap::with_hasher(FxBuildHasher),
            computed: AtomicUsize::new(0),
        }
    }

    pub fn snapshot(&self) -> SnapshotId {
        self.snapshot
    }

    /// Cached plan for `unit`, if already computed.
    pub fn get(&self, unit: &UnitId) -> Option<Arc<LinkPlan>> {
        self.plans
            .get(unit)
            .and_then(|slot| slot.get().cloned())
    }

    /// Return the cached plan for `unit`, computing it on first request.
    ///
    /// A view from a different snapshot is answered without touching the
    /// cache, so stale plans are never served and never stored.
    pub fn get_or_compute<V>(&self, view: &V, unit: &UnitId) -> Arc<LinkPlan>
    where
        V: DependencyView + ?Sized,
    {
        if view.snapshot_id() != self.snapshot {
            debug!(
                unit = %unit,
                cache = %self.snapshot,
                view = %view.snapshot_id(),
                "view does not match cache snapshot; computing uncached plan"
            );
            return Arc::new(LinkPlan::compute(view, unit));
        }

        // Clone the slot out so the shard lock is released before computing.
        let slot: PlanSlot = self.plans.entry(unit.clone()).or_default().clone();
        slot.get_or_init(|| {
            self.computed.fetch_add(1, Ordering::Relaxed);
            Arc::new(LinkPlan::compute(view, unit))
        })
        .clone()
    }

    /// Number of plans actually computed through this cache.
    pub fn computed(&self) -> usize {
        self.computed.load(Ordering::Relaxed)
    }

    /// Number of units with a cached plan.
    pub fn len(&self) -> usize {
        self.plans
            .iter()
            .filter(|entry| entry.value().get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A dependency view paired with its plan cache.
///
/// This is the entry point for the linker-invocation builder: ask for a plan
/// per unit, or for many units at once in parallel.
pub struct LinkPlanner<V> {
    view: Arc<V>,
    cache: PlanCache,
}

impl<V> LinkPlanner<V>
where
    V: DependencyView,
{
    pub fn new(view: V) -> Self {
        Self::from_arc(Arc::new(view))
    }

    pub fn from_arc(view: Arc<V>) -> Self {
        let cache = PlanCache::new(view.snapshot_id());
        Self { view, cache }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    /// Plan for one unit.
    pub fn plan(&self, unit: &UnitId) -> Arc<LinkPlan> {
        self.cache.get_or_compute(self.view.as_ref(), unit)
    }

    /// Plans for many units, computed in parallel. Results follow the order
    /// of `units`.
    pub fn plan_all(&self, units: &[UnitId]) -> Vec<Arc<LinkPlan>> {
        units.par_iter().map(|unit| self.plan(unit)).collect()
    }

    /// Swap in a new view. Cached plans are dropped only when the snapshot
    /// actually changed.
    pub fn refresh(&mut self, view: V) {
        let view = Arc::new(view);
        if view.snapshot_id() != self.cache.snapshot() {
            debug!(
                from = %self.cache.snapshot(),
                to = %view.snapshot_id(),
                "dependency view changed; discarding cached link plans"
            );
            self.cache = PlanCache::new(view.snapshot_id());
        }
        self.view = view;
    }
}
