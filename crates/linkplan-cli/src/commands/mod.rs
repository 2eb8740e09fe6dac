//! Command implementations.
//!
//! Each command lives in its own module and exposes an `execute` function
//! taking its parsed arguments.

pub mod check;
pub mod closure;
pub mod init;
pub mod resolve;
pub mod stats;

pub use check::execute as check_execute;
pub use closure::execute as closure_execute;
pub use init::execute as init_execute;
pub use resolve::execute as resolve_execute;
pub use stats::execute as stats_execute;
