//! In-memory UnitGraph implementation.
//!
//! Units live in an insertion-ordered map behind an `RwLock`; ordering runs
//! against frozen [`GraphSnapshot`]s taken from it.

mod construction;
mod cycles;
mod graph;
mod mutations;
mod queries;
mod snapshot;
mod statistics;

pub use graph::UnitGraph;
pub use queries::DanglingReference;
pub use snapshot::GraphSnapshot;
