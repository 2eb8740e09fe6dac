//! Test suites and shared fixtures.
//!
//! Fixtures use a compact notation for dependency tables:
//! `"a:b,c; b:d"` declares `a -> [b, c]` and `b -> [d]`. Units that are only
//! referenced are declared as leaves so the resulting graphs validate.


use crate::{GraphSnapshot, LibraryUnit, UnitGraph, UnitId};

/// Parse a comma-separated list of ids.
pub(crate) fn ids(list: &str) -> Vec<UnitId> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| UnitId::new(name).unwrap())
        .collect()
}

/// Build a unit from comma-separated static and shared lists.
pub(crate) fn unit(name: &str, static_deps: &str, shared_deps: &str) -> LibraryUnit {
    LibraryUnit::builder(UnitId::new(name).unwrap())
        .static_deps(ids(static_deps))
        .shared_deps(ids(shared_deps))
        .build()
}

fn parse_table(table: &str) -> Vec<(UnitId, Vec<UnitId>)> {
    table
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (name, deps) = entry.split_once(':').unwrap_or((entry, ""));
            (UnitId::new(name.trim()).unwrap(), ids(deps))
        })
        .collect()
}

/// Build a graph from compact static and shared tables.
pub(crate) fn graph(static_table: &str, shared_table: &str) -> UnitGraph {
    let mut order: Vec<UnitId> = Vec::new();
    let mut units: rustc_hash::FxHashMap<UnitId, LibraryUnit> = Default::default();

    let mut declare = |id: &UnitId, order: &mut Vec<UnitId>| {
        units.entry(id.clone()).or_insert_with(|| {
            order.push(id.clone());
            LibraryUnit::new(id.clone())
        });
    };

    let statics = parse_table(static_table);
    let shareds = parse_table(shared_table);
    for (name, _) in statics.iter().chain(shareds.iter()) {
        declare(name, &mut order);
    }
    for (_, deps) in statics.iter().chain(shareds.iter()) {
        for dep in deps {
            declare(dep, &mut order);
        }
    }

    for (name, deps) in statics {
        if let Some(unit) = units.get_mut(&name) {
            unit.static_deps.extend(deps);
        }
    }
    for (name, deps) in shareds {
        if let Some(unit) = units.get_mut(&name) {
            unit.shared_deps.extend(deps);
        }
    }

    let graph = UnitGraph::from_units(order.iter().filter_map(|id| units.remove(id))).unwrap();
    graph.validate().unwrap();
    graph
}

/// Frozen view over compact static and shared tables.
pub(crate) fn view(static_table: &str, shared_table: &str) -> GraphSnapshot {
    graph(static_table, shared_table).snapshot()
}
