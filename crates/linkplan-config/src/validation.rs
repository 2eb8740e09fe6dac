//! Manifest validation.
//!
//! Hard problems (no units, malformed names, references to undeclared units
//! when references are strict) are errors. Legal but suspicious declarations
//! come back as [`ManifestWarning`]s for the caller to report.

use std::fmt;

use indexmap::IndexSet;
use linkplan_graph::{DependencyKind, UnitId};

use crate::error::{ConfigError, Result};
use crate::manifest::{Manifest, UnitDeclaration};

/// A declaration that resolves fine but is probably a mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestWarning {
    /// The same dependency is declared both static and shared.
    StaticAndShared { unit: String, dependency: String },

    /// A dependency is listed more than once; later copies are ignored for
    /// ordering purposes.
    DuplicateDependency {
        unit: String,
        dependency: String,
        kind: DependencyKind,
    },

    /// A dependency names a unit that is not declared; it is treated as a
    /// leaf.
    UndeclaredDependency {
        unit: String,
        dependency: String,
        kind: DependencyKind,
    },
}

impl fmt::Display for ManifestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticAndShared { unit, dependency } => write!(
                f,
                "unit '{unit}' declares '{dependency}' as both a static and a shared dependency"
            ),
            Self::DuplicateDependency {
                unit,
                dependency,
                kind,
            } => write!(
                f,
                "unit '{unit}' lists {kind} dependency '{dependency}' more than once"
            ),
            Self::UndeclaredDependency {
                unit,
                dependency,
                kind,
            } => write!(
                f,
                "unit '{unit}' declares {kind} dependency on undeclared unit '{dependency}'"
            ),
        }
    }
}

/// Pluggable manifest validation.
pub trait ConfigValidator {
    fn validate(&self, manifest: &Manifest) -> Result<Vec<ManifestWarning>>;
}

/// Structural checks on a manifest's unit table.
///
/// # Example
///
/// ```
/// use linkplan_config::{ConfigValidator, Manifest, ManifestValidator};
///
/// let manifest = Manifest::from_toml_str(r#"
/// [units.bin]
/// static = ["lib"]
///
/// [units.lib]
/// "#).unwrap();
///
/// let warnings = ManifestValidator::new().validate(&manifest).unwrap();
/// assert!(warnings.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ManifestValidator {
    strict_references: bool,
}

impl Default for ManifestValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestValidator {
    pub fn new() -> Self {
        Self {
            strict_references: true,
        }
    }

    /// When off, references to undeclared units are warnings instead of
    /// errors.
    pub fn strict_references(mut self, strict: bool) -> Self {
        self.strict_references = strict;
        self
    }

    fn check_name(name: &str) -> Result<()> {
        UnitId::new(name)
            .map(drop)
            .map_err(|source| ConfigError::InvalidUnitId {
                name: name.to_string(),
                source,
            })
    }

    fn check_unit(
        &self,
        manifest: &Manifest,
        name: &str,
        declaration: &UnitDeclaration,
        warnings: &mut Vec<ManifestWarning>,
    ) -> Result<()> {
        let edges = [
            (DependencyKind::Static, &declaration.static_deps),
            (DependencyKind::Shared, &declaration.shared_deps),
        ];

        for (kind, deps) in edges {
            let mut seen = IndexSet::with_capacity(deps.len());
            for dep in deps {
                Self::check_name(dep)?;

                if !seen.insert(dep.as_str()) {
                    warnings.push(ManifestWarning::DuplicateDependency {
                        unit: name.to_string(),
                        dependency: dep.clone(),
                        kind,
                    });
                    continue;
                }

                if !manifest.units.contains_key(dep) {
                    if self.strict_references {
                        return Err(ConfigError::UnknownDependency {
                            unit: name.to_string(),
                            dependency: dep.clone(),
                            kind,
                        });
                    }
                    warnings.push(ManifestWarning::UndeclaredDependency {
                        unit: name.to_string(),
                        dependency: dep.clone(),
                        kind,
                    });
                }
            }
        }

        for dep in &declaration.shared_deps {
            if declaration.static_deps.contains(dep)
                && !warnings.iter().any(|w| {
                    matches!(w, ManifestWarning::StaticAndShared { unit, dependency }
                        if unit == name && dependency == dep)
                })
            {
                warnings.push(ManifestWarning::StaticAndShared {
                    unit: name.to_string(),
                    dependency: dep.clone(),
                });
            }
        }

        Ok(())
    }
}

impl ConfigValidator for ManifestValidator {
    fn validate(&self, manifest: &Manifest) -> Result<Vec<ManifestWarning>> {
        if manifest.units.is_empty() {
            return Err(ConfigError::NoUnits);
        }

        let mut warnings = Vec::new();
        for (name, declaration) in &manifest.units {
            Self::check_name(name)?;
            self.check_unit(manifest, name, declaration, &mut warnings)?;
        }

        Ok(warnings)
    }
}

/// Validate with strict references (convenience function).
pub fn validate_manifest(manifest: &Manifest) -> Result<Vec<ManifestWarning>> {
    ManifestValidator::new().validate(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(source: &str) -> Manifest {
        Manifest::from_toml_str(source).unwrap()
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let err = validate_manifest(&Manifest::default()).unwrap_err();
        assert!(matches!(err, ConfigError::NoUnits));
    }

    #[test]
    fn first_dangling_reference_in_declaration_order() {
        let m = manifest(
            r#"
            [units.bin]
            static = ["lib", "missing_a"]
            shared = ["missing_b"]

            [units.lib]
            "#,
        );

        let err = validate_manifest(&m).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownDependency { ref unit, ref dependency, kind: DependencyKind::Static }
                if unit == "bin" && dependency == "missing_a"
        ));
    }

    #[test]
    fn lenient_references_become_warnings() {
        let m = manifest(
            r#"
            [units.bin]
            static = ["missing"]
            "#,
        );

        let warnings = ManifestValidator::new()
            .strict_references(false)
            .validate(&m)
            .unwrap();
        assert_eq!(
            warnings,
            [ManifestWarning::UndeclaredDependency {
                unit: "bin".into(),
                dependency: "missing".into(),
                kind: DependencyKind::Static,
            }]
        );
    }

    #[test]
    fn invalid_names_are_rejected() {
        let m = manifest(
            r#"
            [units."lib:a"]
            "#,
        );
        let err = validate_manifest(&m).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUnitId { ref name, .. } if name == "lib:a"));
    }

    #[test]
    fn overlap_and_duplicates_are_warnings() {
        let m = manifest(
            r#"
            [units.bin]
            static = ["lib", "util", "lib"]
            shared = ["lib"]

            [units.lib]
            [units.util]
            "#,
        );

        let warnings = validate_manifest(&m).unwrap();
        assert_eq!(
            warnings,
            [
                ManifestWarning::DuplicateDependency {
                    unit: "bin".into(),
                    dependency: "lib".into(),
                    kind: DependencyKind::Static,
                },
                ManifestWarning::StaticAndShared {
                    unit: "bin".into(),
                    dependency: "lib".into(),
                },
            ]
        );
        assert_eq!(
            warnings[1].to_string(),
            "unit 'bin' declares 'lib' as both a static and a shared dependency"
        );
    }
}
