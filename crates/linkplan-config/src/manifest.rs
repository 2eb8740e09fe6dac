//! The `linkplan.toml` manifest.

use indexmap::IndexMap;
use linkplan_graph::{LibraryUnit, UnitGraph, UnitId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::settings::ManifestSettings;

/// Manifest written by `linkplan init`.
pub const STARTER_MANIFEST: &str = r#"# linkplan manifest
#
# Each unit lists its direct static dependencies in the order it wants them
# linked. Shared dependencies are tracked for validation but never appear on
# the link line.

[settings]
cycle_policy = "warn"   # ignore | warn | deny

[units.app]
static = ["libnet", "libutil"]
shared = ["libssl"]

[units.libnet]
static = ["libutil"]

[units.libutil]

[units.libssl]

[profiles.ci.settings]
cycle_policy = "deny"
"#;

/// Declared dependencies of one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitDeclaration {
    #[serde(default, rename = "static")]
    pub static_deps: Vec<String>,

    #[serde(default, rename = "shared")]
    pub shared_deps: Vec<String>,
}

/// Profile overrides, applied with [`Manifest::materialize_profile`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    /// Partial `[settings]` table, deep-merged over the base settings.
    #[serde(default)]
    pub settings: Value,

    /// Unit declarations that replace (or add to) the base units.
    #[serde(default)]
    pub units: IndexMap<String, UnitDeclaration>,
}

/// Parsed manifest. Units keep their declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub settings: ManifestSettings,

    #[serde(default)]
    pub units: IndexMap<String, UnitDeclaration>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub profiles: IndexMap<String, ProfileConfig>,
}

impl Manifest {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| ConfigError::InvalidValue {
            field: "toml".to_string(),
            hint: Some(format!("Invalid manifest: {}", e.message())),
        })
    }

    /// Build a manifest from an already-parsed value.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "manifest".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Names of the declared profiles, in declaration order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Apply a profile's overrides and drop the profile table.
    ///
    /// `None` returns the manifest unchanged apart from the dropped profiles.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> Result<Self> {
        let Some(name) = profile else {
            self.profiles.clear();
            return Ok(self);
        };

        let overrides = self
            .profiles
            .shift_remove(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;

        if !overrides.settings.is_null() {
            let mut base = serde_json::to_value(&self.settings).map_err(|err| {
                ConfigError::InvalidProfileOverride {
                    message: err.to_string(),
                }
            })?;
            merge_values(&mut base, &overrides.settings);
            self.settings =
                serde_json::from_value(base).map_err(|err| ConfigError::InvalidProfileOverride {
                    message: format!("profile '{name}': {err}"),
                })?;
        }

        for (unit, declaration) in overrides.units {
            self.units.insert(unit, declaration);
        }

        self.profiles.clear();
        debug!(profile = name, "materialized manifest profile");
        Ok(self)
    }

    /// Build the dependency graph described by this manifest.
    ///
    /// Names referenced but never declared become leaf units appended after
    /// the declared ones; [`validate_manifest`](crate::validate_manifest)
    /// decides whether that is acceptable.
    pub fn build_graph(&self) -> Result<UnitGraph> {
        let mut units = Vec::with_capacity(self.units.len());
        for (name, declaration) in &self.units {
            let unit = LibraryUnit::builder(parse_id(name)?)
                .static_deps(parse_ids(&declaration.static_deps)?)
                .shared_deps(parse_ids(&declaration.shared_deps)?)
                .build();
            units.push(unit);
        }

        let graph = UnitGraph::from_units(units)?;

        let mut implicit = 0usize;
        for reference in graph.dangling_references() {
            if !graph.contains(&reference.dependency) {
                graph.add_unit(LibraryUnit::new(reference.dependency))?;
                implicit += 1;
            }
        }
        if implicit > 0 {
            debug!(count = implicit, "declared referenced-only units as leaves");
        }

        Ok(graph)
    }
}

fn parse_id(name: &str) -> Result<UnitId> {
    UnitId::new(name).map_err(|source| ConfigError::InvalidUnitId {
        name: name.to_string(),
        source,
    })
}

fn parse_ids(names: &[String]) -> Result<Vec<UnitId>> {
    names.iter().map(|name| parse_id(name)).collect()
}

fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
