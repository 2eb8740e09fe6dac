//! Plain-text rendering of command results.

use linkplan_graph::{GraphStatistics, LinkPlan, UnitId};

/// `unit: a b c`, the unit's archives in link order.
///
/// ```
/// use linkplan_cli::ui::format_plan_line;
/// use linkplan_graph::{LinkPlan, UnitId};
///
/// let id = |s: &str| UnitId::new(s).unwrap();
/// let plan = LinkPlan {
///     unit: id("bin"),
///     out_ordered: vec![id("lib1"), id("lib2")],
///     all_ordered: vec![id("lib1"), id("lib2")],
///     cycles: Vec::new(),
/// };
/// assert_eq!(format_plan_line(&plan), "bin: lib1 lib2");
/// ```
pub fn format_plan_line(plan: &LinkPlan) -> String {
    if plan.out_ordered.is_empty() {
        format!("{}:", plan.unit)
    } else {
        format!("{}: {}", plan.unit, plan.format_link_line())
    }
}

/// One closure member, tagged when it is reachable only through a shared
/// library.
pub fn format_closure_line(unit: &UnitId, shared_only: bool) -> String {
    if shared_only {
        format!("{unit} (shared only)")
    } else {
        unit.to_string()
    }
}

/// Print statistics as aligned `label: value` lines on stdout.
pub fn print_statistics(stats: &GraphStatistics) {
    let rows = [
        ("units", stats.unit_count),
        ("static edges", stats.static_edge_count),
        ("shared edges", stats.shared_edge_count),
        ("roots", stats.root_count),
        ("leaves", stats.leaf_count),
        ("units in static cycles", stats.cyclic_unit_count),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        println!("{label:<width$}  {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_plan_prints_bare_unit() {
        let plan = LinkPlan {
            unit: UnitId::new("leaf").unwrap(),
            out_ordered: Vec::new(),
            all_ordered: Vec::new(),
            cycles: Vec::new(),
        };
        assert_eq!(format_plan_line(&plan), "leaf:");
    }

    #[test]
    fn shared_only_members_are_tagged() {
        let unit = UnitId::new("libssl").unwrap();
        assert_eq!(format_closure_line(&unit, true), "libssl (shared only)");
        assert_eq!(format_closure_line(&unit, false), "libssl");
    }
}
