//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::enums::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print link plans
    ///
    /// With no units named, plans every unit in the manifest in declaration
    /// order.
    Resolve(ResolveArgs),

    /// Print the full static and shared closure of a unit
    Closure(ClosureArgs),

    /// Validate the manifest and report static cycles
    ///
    /// Fails when `cycle_policy = "deny"` and a static cycle exists.
    Check(CheckArgs),

    /// Print graph statistics
    Stats(StatsArgs),

    /// Write a starter linkplan.toml
    Init(InitArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Units to plan
    #[arg(value_name = "UNIT")]
    pub units: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ClosureArgs {
    /// Unit whose closure to print
    #[arg(value_name = "UNIT")]
    pub unit: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Treat undeclared dependencies as errors regardless of settings
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write linkplan.toml into
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing manifest
    #[arg(long)]
    pub force: bool,
}
