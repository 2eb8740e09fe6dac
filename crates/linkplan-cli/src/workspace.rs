//! Manifest loading shared by the manifest-reading commands.

use std::path::PathBuf;

use linkplan_config::{
    ConfigValidator, Manifest, ManifestDiscovery, ManifestValidator, ManifestWarning,
    ResolverSettings,
};
use linkplan_graph::{GraphSnapshot, UnitGraph, UnitId};
use tracing::debug;

use crate::cli::GlobalOptions;
use crate::error::{CliError, Result};
use crate::logger::Logger;

/// A loaded, validated manifest and the graph built from it.
pub struct Workspace {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    pub settings: ResolverSettings,
    pub warnings: Vec<ManifestWarning>,
    pub graph: UnitGraph,
}

impl Workspace {
    /// Load the manifest named by `--manifest`, or discover one in the
    /// current directory, then apply `--profile`.
    pub fn load(global: &GlobalOptions, logger: &Logger) -> Result<Self> {
        let manifest_path = match &global.manifest {
            Some(path) => path.clone(),
            None => {
                let cwd = std::env::current_dir()?;
                ManifestDiscovery::new(&cwd)
                    .find()
                    .ok_or(linkplan_config::ConfigError::NotFound(cwd))?
            }
        };

        let manifest =
            linkplan_config::load_from(&manifest_path)?.materialize_profile(global.profile.as_deref())?;
        let settings = ResolverSettings::load(&manifest.settings)?;
        logger.apply_manifest_level(settings.log_level.as_deref());

        Self::from_parts(manifest_path, manifest, settings)
    }

    /// Validate and build from an already-loaded manifest.
    pub fn from_parts(
        manifest_path: PathBuf,
        manifest: Manifest,
        settings: ResolverSettings,
    ) -> Result<Self> {
        let warnings = ManifestValidator::new()
            .strict_references(settings.strict_references)
            .validate(&manifest)?;
        let graph = manifest.build_graph()?;

        debug!(
            path = %manifest_path.display(),
            units = graph.unit_count(),
            warnings = warnings.len(),
            "loaded manifest"
        );

        Ok(Self {
            manifest_path,
            manifest,
            settings,
            warnings,
            graph,
        })
    }

    /// Print manifest warnings unless `--quiet`.
    pub fn report_warnings(&self, global: &GlobalOptions) {
        if global.quiet {
            return;
        }
        for warning in &self.warnings {
            crate::ui::warning(&warning.to_string());
        }
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        self.graph.snapshot()
    }

    /// Look up a unit named on the command line.
    pub fn unit_id(&self, name: &str) -> Result<UnitId> {
        let unknown = || CliError::UnknownUnit {
            name: name.to_string(),
            suggestion: self.suggest(name),
        };

        let id = UnitId::new(name).map_err(|_| unknown())?;
        if self.graph.contains(&id) {
            Ok(id)
        } else {
            Err(unknown())
        }
    }

    /// Closest declared unit name, by a case-insensitive substring match.
    fn suggest(&self, name: &str) -> Option<String> {
        let needle = name.to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.graph
            .unit_ids()
            .into_iter()
            .map(|id| id.to_string())
            .find(|candidate| {
                let candidate = candidate.to_lowercase();
                candidate.contains(&needle) || needle.contains(&candidate)
            })
    }

    /// Run `f` on a rayon pool sized by `parallel_jobs`, or on the global
    /// pool when unset.
    pub fn with_thread_pool<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        match self.settings.parallel_jobs {
            Some(0) => Err(CliError::InvalidArgument(
                "parallel_jobs must be at least 1".to_string(),
            )),
            Some(jobs) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
                Ok(pool.install(f))
            }
            None => Ok(f()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace(source: &str) -> Workspace {
        let manifest = Manifest::from_toml_str(source).unwrap();
        Workspace::from_parts(
            PathBuf::from("linkplan.toml"),
            manifest,
            ResolverSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn unknown_unit_suggests_close_name() {
        let ws = workspace(
            r#"
            [units.libcrypto]
            [units.app]
            static = ["libcrypto"]
            "#,
        );

        assert!(ws.unit_id("app").is_ok());
        match ws.unit_id("crypto") {
            Err(CliError::UnknownUnit { name, suggestion }) => {
                assert_eq!(name, "crypto");
                assert_eq!(suggestion.as_deref(), Some("libcrypto"));
            }
            other => panic!("expected UnknownUnit, got {other:?}"),
        }
        assert!(matches!(
            ws.unit_id("bad name"),
            Err(CliError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn strict_settings_reject_dangling_references() {
        let manifest = Manifest::from_toml_str("[units.app]\nstatic = [\"missing\"]").unwrap();
        let err = Workspace::from_parts(
            PathBuf::from("linkplan.toml"),
            manifest.clone(),
            ResolverSettings::default(),
        )
        .err()
        .unwrap();
        assert!(matches!(err, CliError::Config(_)));

        let lenient = ResolverSettings {
            strict_references: false,
            ..ResolverSettings::default()
        };
        let ws = Workspace::from_parts(PathBuf::from("linkplan.toml"), manifest, lenient).unwrap();
        assert_eq!(ws.warnings.len(), 1);
        assert_eq!(ws.graph.unit_count(), 2);
    }

    #[test]
    fn zero_parallel_jobs_is_rejected() {
        let mut ws = workspace("[units.app]");
        ws.settings.parallel_jobs = Some(0);
        assert!(ws.with_thread_pool(|| ()).is_err());

        ws.settings.parallel_jobs = Some(2);
        assert_eq!(ws.with_thread_pool(|| 7).unwrap(), 7);
    }
}
