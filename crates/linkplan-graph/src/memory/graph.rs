//! Core UnitGraph structure.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;

use super::super::{LibraryUnit, UnitId};
use super::snapshot::GraphSnapshot;

/// Units keyed by id, in declaration order.
pub(crate) type UnitMap = IndexMap<UnitId, LibraryUnit, FxBuildHasher>;

/// Mutable library dependency graph.
///
/// Cloning is cheap and shares the underlying storage. Ordering queries never
/// run against the graph directly: take a [`GraphSnapshot`] first, which is
/// frozen and implements [`DependencyView`](crate::DependencyView).
#[derive(Debug, Clone)]
pub struct UnitGraph {
    pub(super) inner: Arc<RwLock<GraphInner>>,
}

#[derive(Debug, Default)]
pub(super) struct GraphInner {
    pub units: UnitMap,
    /// Bumped by every mutation.
    pub generation: u64,
    /// Frozen copy of `units`, valid until the next mutation.
    pub snapshot: Option<GraphSnapshot>,
}

impl GraphInner {
    /// Record a mutation and drop the cached snapshot.
    pub fn touch(&mut self) {
        self.generation += 1;
        self.snapshot = None;
    }
}
