//! Ordering algorithms over a [`DependencyView`](crate::DependencyView).
//!
//! - [`OrderMerger`] - link order of a unit's declared static archives
//! - [`ClosureWalker`] - full static-or-shared reachability

mod closure;
mod merger;
mod visit;

pub use closure::ClosureWalker;
pub use merger::{OrderMerger, Resolution};
