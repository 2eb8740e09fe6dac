//! Manifest discovery on the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::manifest::Manifest;

/// File names searched for, in priority order.
pub const MANIFEST_FILE_NAMES: [&str; 2] = ["linkplan.toml", ".linkplan.toml"];

/// Finds and loads a manifest in a directory.
///
/// # Example
///
/// ```no_run
/// use linkplan_config::ManifestDiscovery;
///
/// let manifest = ManifestDiscovery::new(".").load().unwrap();
/// ```
pub struct ManifestDiscovery {
    root: PathBuf,
}

impl ManifestDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Find a manifest in the root directory.
    ///
    /// Searches in this order:
    /// 1. `linkplan.toml`
    /// 2. `.linkplan.toml`
    pub fn find(&self) -> Option<PathBuf> {
        MANIFEST_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load the discovered manifest.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no manifest is found.
    pub fn load(&self) -> Result<Manifest> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        load_from(&path)
    }

    /// Load the discovered manifest with a profile applied.
    pub fn load_with_profile(&self, profile: &str) -> Result<Manifest> {
        self.load()?.materialize_profile(Some(profile))
    }
}

/// Load a manifest from an explicit path.
pub fn load_from(path: &Path) -> Result<Manifest> {
    debug!(path = %path.display(), "loading manifest");
    let content = fs::read_to_string(path)?;
    Manifest::from_toml_str(&content)
}

/// Discover the manifest in the current directory (convenience function).
pub fn discover() -> Result<Manifest> {
    let root = std::env::current_dir()?;
    ManifestDiscovery::new(&root).load()
}
