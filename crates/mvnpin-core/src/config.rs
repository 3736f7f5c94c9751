use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use mvnpin_util::errors::MvnpinResult;

/// Default bound on how deep the flattener descends into the tree.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Global user configuration loaded from `~/.mvnpin/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub resolve: ResolveConfig,
}

/// Conflict resolution settings from `[resolve]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    #[serde(default = "default_max_depth", rename = "max-depth")]
    pub max_depth: usize,
    #[serde(default, rename = "on-metadata-mismatch")]
    pub on_metadata_mismatch: MismatchPolicy,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            on_metadata_mismatch: MismatchPolicy::default(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// What to do when duplicates of a conflicted library disagree on metadata
/// other than the version (type, classifier, scope, optional).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    /// Report and carry on with the first-seen node's metadata.
    #[default]
    Warn,
    /// Fail the run.
    Deny,
    /// Say nothing.
    Ignore,
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> MvnpinResult<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> MvnpinResult<Self> {
        if !path.is_file() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            mvnpin_util::errors::MvnpinError::Config {
                message: format!("Failed to read global config: {e}"),
            }
        })?;
        toml::from_str(&content).map_err(|e| {
            mvnpin_util::errors::MvnpinError::Config {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the mvnpin data directory (`~/.mvnpin/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".mvnpin")
}
