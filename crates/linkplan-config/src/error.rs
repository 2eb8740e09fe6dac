//! Error types for manifest loading and validation.

use std::path::PathBuf;

use linkplan_graph::{DependencyKind, GraphError, UnitIdError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Discovery errors
    #[error("no manifest found in {0} (looked for linkplan.toml and .linkplan.toml)")]
    NotFound(PathBuf),

    // Parsing/loading errors
    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    #[error("unknown profile '{0}'")]
    UnknownProfile(String),

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    // Manifest validation errors
    #[error("manifest declares no units")]
    NoUnits,

    #[error("invalid unit name '{name}': {source}")]
    InvalidUnitId {
        name: String,
        #[source]
        source: UnitIdError,
    },

    #[error("unit '{unit}' declares {kind} dependency on unknown unit '{dependency}'")]
    UnknownDependency {
        unit: String,
        dependency: String,
        kind: DependencyKind,
    },

    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
