//! Closure command implementation.

use linkplan_graph::{ClosureWalker, UnitId};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::cli::{ClosureArgs, GlobalOptions, OutputFormat};
use crate::error::Result;
use crate::logger::Logger;
use crate::ui;
use crate::workspace::Workspace;

#[derive(Serialize)]
struct ClosureEntry<'a> {
    unit: &'a UnitId,
    shared_only: bool,
}

/// Print everything `unit` reaches through static or shared edges.
pub fn execute(args: ClosureArgs, global: &GlobalOptions, logger: &Logger) -> Result<()> {
    let workspace = Workspace::load(global, logger)?;
    workspace.report_warnings(global);

    let unit = workspace.unit_id(&args.unit)?;
    let snapshot = workspace.snapshot();
    let walker = ClosureWalker::new(&snapshot);

    let closure = walker.closure(&unit);
    let shared_only: FxHashSet<UnitId> = walker.shared_only(&unit).into_iter().collect();

    let entries: Vec<ClosureEntry<'_>> = closure
        .iter()
        .map(|member| ClosureEntry {
            unit: member,
            shared_only: shared_only.contains(member),
        })
        .collect();

    match args.format {
        OutputFormat::Text => {
            for entry in &entries {
                println!("{}", ui::format_closure_line(entry.unit, entry.shared_only));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
