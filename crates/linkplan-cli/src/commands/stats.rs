//! Stats command implementation.

use crate::cli::{GlobalOptions, OutputFormat, StatsArgs};
use crate::error::Result;
use crate::logger::Logger;
use crate::ui;
use crate::workspace::Workspace;

pub fn execute(args: StatsArgs, global: &GlobalOptions, logger: &Logger) -> Result<()> {
    let workspace = Workspace::load(global, logger)?;
    workspace.report_warnings(global);

    let stats = workspace.snapshot().statistics();

    match args.format {
        OutputFormat::Text => ui::print_statistics(&stats),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
    }

    Ok(())
}
