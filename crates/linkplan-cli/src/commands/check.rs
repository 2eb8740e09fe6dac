//! Check command implementation.
//!
//! Validates the manifest, then looks for static cycles. What a cycle means
//! is up to the `cycle_policy` setting.

use linkplan_config::CyclePolicy;
use linkplan_graph::CycleGroup;
use tracing::info;

use crate::cli::{CheckArgs, GlobalOptions};
use crate::error::{CliError, Result};
use crate::logger::Logger;
use crate::ui;
use crate::workspace::Workspace;

/// Execute the check command.
///
/// # Errors
///
/// Returns errors for:
/// - Manifest loading or validation failures
/// - Static cycles under `cycle_policy = "deny"`
pub fn execute(args: CheckArgs, global: &GlobalOptions, logger: &Logger) -> Result<()> {
    let mut workspace = Workspace::load(global, logger)?;
    if args.strict && !workspace.settings.strict_references {
        workspace.settings.strict_references = true;
        workspace = Workspace::from_parts(
            workspace.manifest_path,
            workspace.manifest,
            workspace.settings,
        )?;
    }

    workspace.report_warnings(global);

    let snapshot = workspace.snapshot();
    let groups = snapshot.static_cycle_groups();
    info!(
        units = snapshot.len(),
        cycles = groups.len(),
        "checked manifest"
    );

    apply_cycle_policy(workspace.settings.cycle_policy, &groups, global.quiet)?;

    if !global.quiet {
        let stats = snapshot.statistics();
        ui::success(&format!(
            "{}: {} units, {} static edges, {} shared edges",
            workspace.manifest_path.display(),
            stats.unit_count,
            stats.static_edge_count,
            stats.shared_edge_count
        ));
    }

    Ok(())
}

fn format_group(group: &CycleGroup) -> String {
    group
        .members
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Report or reject static cycle groups according to `policy`.
pub fn apply_cycle_policy(policy: CyclePolicy, groups: &[CycleGroup], quiet: bool) -> Result<()> {
    let Some(first) = groups.first() else {
        return Ok(());
    };

    match policy {
        CyclePolicy::Ignore => Ok(()),
        CyclePolicy::Warn => {
            if !quiet {
                for group in groups {
                    ui::warning(&format!("static dependency cycle: {}", format_group(group)));
                }
            }
            Ok(())
        }
        CyclePolicy::Deny => {
            for group in groups {
                ui::error(&format!("static dependency cycle: {}", format_group(group)));
            }
            Err(CliError::CyclesDenied {
                count: groups.len(),
                first: format_group(first),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkplan_graph::UnitId;

    fn group(names: &[&str]) -> CycleGroup {
        CycleGroup {
            members: names.iter().map(|n| UnitId::new(*n).unwrap()).collect(),
        }
    }

    #[test]
    fn no_cycles_pass_every_policy() {
        for policy in [CyclePolicy::Ignore, CyclePolicy::Warn, CyclePolicy::Deny] {
            assert!(apply_cycle_policy(policy, &[], true).is_ok());
        }
    }

    #[test]
    fn deny_fails_with_first_group() {
        let groups = [group(&["a", "b"]), group(&["c"])];
        assert!(apply_cycle_policy(CyclePolicy::Warn, &groups, true).is_ok());

        match apply_cycle_policy(CyclePolicy::Deny, &groups, true) {
            Err(CliError::CyclesDenied { count, first }) => {
                assert_eq!(count, 2);
                assert_eq!(first, "a, b");
            }
            other => panic!("expected CyclesDenied, got {other:?}"),
        }
    }
}
