//! Resolver settings and their layering.
//!
//! Effective settings are merged from three sources, later ones winning:
//! built-in defaults, the manifest's `[settings]` table, and `LINKPLAN_*`
//! environment variables.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable prefix for setting overrides.
pub const ENV_PREFIX: &str = "LINKPLAN_";

/// How static dependency cycles are treated by `check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Say nothing.
    Ignore,
    /// Report cycles as warnings.
    #[default]
    Warn,
    /// Treat any static cycle as an error.
    Deny,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    #[serde(default)]
    pub cycle_policy: CyclePolicy,

    /// Reject references to undeclared units. When off they are treated as
    /// leaves and reported as warnings.
    #[serde(default = "default_strict_references")]
    pub strict_references: bool,

    #[serde(default)]
    pub log_level: Option<String>,

    /// Worker threads for planning many units; `None` uses all cores.
    #[serde(default)]
    pub parallel_jobs: Option<usize>,
}

fn default_strict_references() -> bool {
    true
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            cycle_policy: CyclePolicy::default(),
            strict_references: default_strict_references(),
            log_level: None,
            parallel_jobs: None,
        }
    }
}

/// Partial settings as written in a manifest. Unset fields fall through to
/// the layer below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle_policy: Option<CyclePolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_references: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel_jobs: Option<usize>,
}

impl ResolverSettings {
    /// Resolve settings from defaults, manifest values and the environment.
    pub fn load(manifest: &ManifestSettings) -> Result<Self> {
        Self::figment(manifest).extract().map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// The provider stack behind [`load`](Self::load).
    pub fn figment(manifest: &ManifestSettings) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ResolverSettings::default()))
            .merge(Serialized::defaults(manifest))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_values_override_defaults() {
        figment::Jail::expect_with(|_jail| {
            let manifest = ManifestSettings {
                cycle_policy: Some(CyclePolicy::Deny),
                parallel_jobs: Some(4),
                ..Default::default()
            };

            let settings = ResolverSettings::load(&manifest).expect("load");
            assert_eq!(settings.cycle_policy, CyclePolicy::Deny);
            assert_eq!(settings.parallel_jobs, Some(4));
            assert!(settings.strict_references);
            Ok(())
        });
    }

    #[test]
    fn environment_overrides_manifest() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LINKPLAN_CYCLE_POLICY", "ignore");
            jail.set_env("LINKPLAN_STRICT_REFERENCES", "false");

            let manifest = ManifestSettings {
                cycle_policy: Some(CyclePolicy::Deny),
                ..Default::default()
            };

            let settings = ResolverSettings::load(&manifest).expect("load");
            assert_eq!(settings.cycle_policy, CyclePolicy::Ignore);
            assert!(!settings.strict_references);
            Ok(())
        });
    }

    #[test]
    fn invalid_environment_value_is_reported() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LINKPLAN_CYCLE_POLICY", "sometimes");

            let err = ResolverSettings::load(&ManifestSettings::default()).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "settings"));
            Ok(())
        });
    }
}
