//! Read-only access to a resolved dependency graph.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::UnitId;

static NEXT_SNAPSHOT: AtomicU64 = AtomicU64::new(1);

/// Identity of one frozen state of a dependency graph.
///
/// Ids are process-unique; two views with the same id always answer every
/// query identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SnapshotId(u64);

impl SnapshotId {
    /// Allocate a fresh id.
    pub fn next() -> Self {
        Self(NEXT_SNAPSHOT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "snapshot#{}", self.0)
    }
}

/// Read-only accessor over an already-resolved module graph.
///
/// Lists are returned exactly as authored. Identifiers the view does not know
/// behave as leaves.
pub trait DependencyView: Send + Sync {
    /// Directly declared static-archive dependencies, in declaration order.
    fn static_deps(&self, unit: &UnitId) -> &[UnitId];

    /// Directly declared dynamically-linked dependencies, in declaration order.
    fn shared_deps(&self, unit: &UnitId) -> &[UnitId];

    fn contains(&self, unit: &UnitId) -> bool;

    /// Identity of the graph state this view reads from.
    fn snapshot_id(&self) -> SnapshotId;
}

/// Which dependency edges a traversal follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKinds {
    /// Static-archive edges only (link order).
    Static,
    /// Static edges then shared edges (full closure).
    StaticAndShared,
}

impl EdgeKinds {
    /// Children of `unit` in reverse declaration order.
    ///
    /// The forward order is static deps followed by shared deps, so the
    /// reverse yields shared deps (last first) before static deps.
    pub(crate) fn reverse_children<'v, V>(
        self,
        view: &'v V,
        unit: &UnitId,
    ) -> ReverseChildren<'v>
    where
        V: DependencyView + ?Sized,
    {
        let shared: &'v [UnitId] = match self {
            EdgeKinds::Static => &[],
            EdgeKinds::StaticAndShared => view.shared_deps(unit),
        };
        shared.iter().rev().chain(view.static_deps(unit).iter().rev())
    }
}

pub(crate) type ReverseChildren<'v> = std::iter::Chain<
    std::iter::Rev<std::slice::Iter<'v, UnitId>>,
    std::iter::Rev<std::slice::Iter<'v, UnitId>>,
>;
