//! # linkplan-config
//!
//! Manifest and settings handling for linkplan.
//!
//! A manifest (`linkplan.toml`) declares library units with their ordered
//! static and shared dependencies, optional `[settings]`, and named
//! `[profiles]` that override both. This crate parses, validates and
//! layers those sources; turning a manifest into link plans is the job of
//! `linkplan-graph`.
//!
//! ```
//! use linkplan_config::{Manifest, ResolverSettings, CyclePolicy};
//!
//! let manifest = Manifest::from_toml_str(r#"
//! [settings]
//! cycle_policy = "deny"
//!
//! [units.bin]
//! static = ["lib"]
//!
//! [units.lib]
//! "#).unwrap();
//!
//! let graph = manifest.build_graph().unwrap();
//! assert_eq!(graph.unit_count(), 2);
//! assert_eq!(manifest.settings.cycle_policy, Some(CyclePolicy::Deny));
//! ```

pub mod discovery;
pub mod error;
pub mod manifest;
pub mod settings;
pub mod validation;

pub use discovery::{MANIFEST_FILE_NAMES, ManifestDiscovery, discover, load_from};
pub use error::{ConfigError, Result};
pub use manifest::{Manifest, ProfileConfig, STARTER_MANIFEST, UnitDeclaration};
pub use settings::{CyclePolicy, ENV_PREFIX, ManifestSettings, ResolverSettings};
pub use validation::{ConfigValidator, ManifestValidator, ManifestWarning, validate_manifest};
