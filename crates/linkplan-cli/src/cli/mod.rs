//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `linkplan resolve` - Print link plans for one or more units
//! - `linkplan closure` - Print everything a unit reaches
//! - `linkplan check` - Validate the manifest and report static cycles
//! - `linkplan stats` - Graph statistics
//! - `linkplan init` - Write a starter manifest

mod commands;
pub mod enums;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{CheckArgs, ClosureArgs, Command, InitArgs, ResolveArgs, StatsArgs};
pub use enums::OutputFormat;

/// linkplan - link order for static archives
#[derive(Parser, Debug)]
#[command(
    name = "linkplan",
    version,
    about = "Resolve static archive link order from a unit manifest",
    long_about = "linkplan reads a manifest of library units and their ordered static and\n\
                  shared dependencies, and computes for each unit the archive order a\n\
                  single-pass linker needs."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Manifest path (defaults to linkplan.toml or .linkplan.toml in the
    /// current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Profile to apply from the manifest's [profiles] table
    #[arg(short, long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Flags every manifest-reading command needs.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub manifest: Option<PathBuf>,
    pub profile: Option<String>,
    pub quiet: bool,
}

impl Cli {
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            manifest: self.manifest.clone(),
            profile: self.profile.clone(),
            quiet: self.quiet,
        }
    }
}
