//! linkplan CLI - static archive link-order resolution from the command line.
//!
//! The binary reads a `linkplan.toml` manifest, builds the unit graph with
//! `linkplan-graph`, and prints link plans, closures, statistics or
//! diagnostics.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`commands`] - one module per subcommand
//! - [`workspace`] - manifest loading shared by the commands
//! - [`error`] - `CliError` and its miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages on stderr
//!
//! # Example
//!
//! ```rust,no_run
//! use linkplan_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     let _logger = logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
pub mod workspace;

pub use error::{CliError, Result};
