//! Error handling for the linkplan CLI.
//!
//! Library errors convert into [`CliError`] via `#[from]`; `main` turns the
//! result into a miette report.

mod miette;

use std::path::PathBuf;

use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Manifest loading, parsing and validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] linkplan_config::ConfigError),

    /// Graph construction errors
    #[error("Graph error: {0}")]
    Graph(#[from] linkplan_graph::GraphError),

    /// A unit named on the command line is not in the manifest
    #[error("Unknown unit '{name}'")]
    UnknownUnit { name: String, suggestion: Option<String> },

    /// Static cycles found while `cycle_policy = "deny"`
    #[error("{count} static dependency cycle(s) found: {first}")]
    CyclesDenied { count: usize, first: String },

    /// The target file already exists
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

impl CliError {
    /// Actionable follow-up shown under the error, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Config(linkplan_config::ConfigError::NotFound(_)) => {
                Some("Run 'linkplan init' or pass --manifest <PATH>".to_string())
            }
            Self::Config(linkplan_config::ConfigError::UnknownProfile(_)) => {
                Some("Profiles are declared as [profiles.NAME] in the manifest".to_string())
            }
            Self::Config(linkplan_config::ConfigError::UnknownDependency { dependency, .. }) => {
                Some(format!(
                    "Declare [units.{dependency}] or set strict_references = false"
                ))
            }
            Self::UnknownUnit {
                suggestion: Some(candidate),
                ..
            } => Some(format!("Did you mean '{candidate}'?")),
            Self::UnknownUnit { .. } => {
                Some("Run 'linkplan resolve' to list every declared unit".to_string())
            }
            Self::CyclesDenied { .. } => Some(
                "Break the cycle or set cycle_policy = \"warn\" to allow it".to_string(),
            ),
            Self::AlreadyExists(_) => Some("Use --force to overwrite it".to_string()),
            _ => None,
        }
    }
}
