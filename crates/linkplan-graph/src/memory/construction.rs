//! Construction methods for UnitGraph.

use std::sync::Arc;

use parking_lot::RwLock;

use super::super::{LibraryUnit, Result};
use super::graph::{GraphInner, UnitGraph};

impl UnitGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(GraphInner::default())),
        }
    }

    /// Construct a graph from units in declaration order.
    ///
    /// Dependencies may reference units that appear later (or not at all);
    /// call [`validate`](Self::validate) once the graph is complete.
    pub fn from_units<I>(units: I) -> Result<Self>
    where
        I: IntoIterator<Item = LibraryUnit>,
    {
        let graph = Self::new();
        for unit in units {
            graph.add_unit(unit)?;
        }
        Ok(graph)
    }
}

impl Default for UnitGraph {
    fn default() -> Self {
        Self::new()
    }
}
