//! # linkplan-graph
//!
//! Static-archive link-order resolution over library dependency graphs.
//!
//! Single-pass linkers resolve symbols left to right, so an archive has to be
//! listed before every archive it pulls symbols from. Each library declares
//! the order of its own direct static dependencies; a binary that reaches
//! many libraries transitively needs one command line that honours all of
//! those declarations at once. This crate computes that order.
//!
//! ## Overview
//!
//! - **Pure data and algorithms**: no I/O; graphs are built by the caller
//! - **Deterministic**: identical input always yields identical output
//! - **Cycle tolerant**: cycles are reported, never fatal
//! - **Thread-safe**: frozen snapshots, per-call visit state, shared caches
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   snapshot()   ┌────────────────┐
//! │  UnitGraph   │ ─────────────▶ │ GraphSnapshot  │ (DependencyView)
//! │ (mutable)    │                └───────┬────────┘
//! └──────────────┘                        │
//!                          ┌──────────────┼──────────────┐
//!                          ▼                             ▼
//!                   ┌─────────────┐              ┌───────────────┐
//!                   │ OrderMerger │              │ ClosureWalker │
//!                   │ out_ordered │              │  all_ordered  │
//!                   └──────┬──────┘              └───────┬───────┘
//!                          └──────────────┬──────────────┘
//!                                         ▼
//!                               ┌───────────────────┐
//!                               │ LinkPlan / cache  │
//!                               └───────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use linkplan_graph::{LibraryUnit, LinkPlanner, UnitGraph, UnitId};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let id = |name: &str| UnitId::new(name);
//!
//! let graph = UnitGraph::from_units([
//!     LibraryUnit::builder(id("bin")?)
//!         .static_deps([id("lib2")?, id("lib1")?])
//!         .build(),
//!     LibraryUnit::builder(id("lib1")?)
//!         .static_deps([id("lib2")?, id("liboptional")?])
//!         .build(),
//!     LibraryUnit::new(id("lib2")?),
//!     LibraryUnit::new(id("liboptional")?),
//! ])?;
//! graph.validate()?;
//!
//! let planner = LinkPlanner::new(graph.snapshot());
//! let plan = planner.plan(&id("bin")?);
//!
//! assert_eq!(plan.format_link_line(), "lib1 lib2");
//! assert_eq!(plan.all_ordered.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Link order versus closure
//!
//! [`LinkPlan::out_ordered`] holds the unit's own declared static
//! dependencies, deduplicated and reordered so that no archive precedes one
//! that depends on it. Transitive archives shape that order but are not
//! added. [`LinkPlan::all_ordered`] holds everything reachable through
//! static or shared edges and is used for validation only; a unit reachable
//! solely through a shared library never appears in the link order.

pub mod cache;
pub mod cycle;
pub mod order;
pub mod plan;
pub mod statistics;
pub mod unit;
pub mod unit_id;
pub mod view;

mod memory;

pub use cache::{LinkPlanner, PlanCache};
pub use cycle::{CycleGroup, StaticCycle};
pub use memory::{DanglingReference, GraphSnapshot, UnitGraph};
pub use order::{ClosureWalker, OrderMerger, Resolution};
pub use plan::LinkPlan;
pub use statistics::GraphStatistics;
pub use unit::{DependencyKind, LibraryUnit, LibraryUnitBuilder};
pub use unit_id::{UnitId, UnitIdError};
pub use view::{DependencyView, EdgeKinds, SnapshotId};

/// Error types for graph construction and validation.
///
/// The ordering algorithms themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A unit with this id is already declared.
    #[error("unit '{0}' is already declared")]
    DuplicateUnit(UnitId),

    /// The unit is not declared in the graph.
    #[error("unit '{0}' is not declared")]
    UnknownUnit(UnitId),

    /// A declared dependency points at an undeclared unit.
    #[error("unit '{unit}' declares {kind} dependency on unknown unit '{dependency}'")]
    UnknownDependency {
        unit: UnitId,
        dependency: UnitId,
        kind: DependencyKind,
    },

    #[error(transparent)]
    InvalidUnitId(#[from] UnitIdError),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests;
