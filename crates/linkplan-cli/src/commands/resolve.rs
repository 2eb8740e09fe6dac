//! Resolve command implementation.

use std::sync::Arc;

use linkplan_config::CyclePolicy;
use linkplan_graph::{LinkPlan, LinkPlanner, UnitId};
use tracing::info;

use crate::cli::{GlobalOptions, OutputFormat, ResolveArgs};
use crate::error::Result;
use crate::logger::Logger;
use crate::ui;
use crate::workspace::Workspace;

/// Print link plans for the named units, or for every unit.
pub fn execute(args: ResolveArgs, global: &GlobalOptions, logger: &Logger) -> Result<()> {
    let workspace = Workspace::load(global, logger)?;
    workspace.report_warnings(global);

    let units = if args.units.is_empty() {
        workspace.graph.unit_ids()
    } else {
        args.units
            .iter()
            .map(|name| workspace.unit_id(name))
            .collect::<Result<Vec<UnitId>>>()?
    };

    let planner = LinkPlanner::new(workspace.snapshot());
    let plans = workspace.with_thread_pool(|| planner.plan_all(&units))?;
    info!(units = plans.len(), "resolved link plans");

    if workspace.settings.cycle_policy != CyclePolicy::Ignore && !global.quiet {
        report_cycles(&plans);
    }

    match args.format {
        OutputFormat::Text => {
            for plan in &plans {
                println!("{}", ui::format_plan_line(plan));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&plans)?);
        }
    }

    Ok(())
}

fn report_cycles(plans: &[Arc<LinkPlan>]) {
    for plan in plans {
        for cycle in &plan.cycles {
            ui::warning(&format!(
                "static cycle while ordering '{}': {}",
                plan.unit,
                cycle.format_chain()
            ));
        }
    }
}
