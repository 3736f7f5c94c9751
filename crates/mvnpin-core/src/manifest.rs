use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use mvnpin_util::errors::{MvnpinError, MvnpinResult};

use crate::dependency::{Coordinate, Dependency};

/// Name of the table holding centrally pinned versions.
pub const MANAGEMENT_TABLE: &str = "dependency-management";

/// The parsed representation of a `Mvnpin.toml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMetadata,

    #[serde(default)]
    pub dependencies: BTreeMap<String, Dependency>,

    #[serde(default, rename = "dev-dependencies")]
    pub dev_dependencies: BTreeMap<String, Dependency>,

    /// Pinned versions keyed by `group:artifact`.
    #[serde(default, rename = "dependency-management")]
    pub dependency_management: BTreeMap<String, String>,
}

/// Package identity from the `[package]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    #[serde(default)]
    pub group: Option<String>,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Which dependency table a declaration lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencySection {
    Dependencies,
    DevDependencies,
}

impl DependencySection {
    pub const ALL: [DependencySection; 2] = [Self::Dependencies, Self::DevDependencies];

    /// The TOML table name.
    pub fn table(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "dev-dependencies",
        }
    }
}

impl Manifest {
    /// Load and parse a `Mvnpin.toml` from the given path.
    pub fn from_path(path: &Path) -> MvnpinResult<Self> {
        let content = mvnpin_util::fs::read_to_string(path).map_err(|e| {
            MvnpinError::Manifest {
                message: format!("Failed to read manifest: {e}"),
            }
        })?;
        Self::from_str(&content)
    }

    /// Parse a `Mvnpin.toml` from a string.
    ///
    /// Every `[dependency-management]` key must be a `group:artifact` coordinate.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> MvnpinResult<Self> {
        let manifest: Self = toml::from_str(content).map_err(|e| MvnpinError::Manifest {
            message: format!("Failed to parse Mvnpin.toml: {e}"),
        })?;
        if let Some(bad) = manifest
            .dependency_management
            .keys()
            .find(|key| Coordinate::parse(key).is_none())
        {
            return Err(MvnpinError::Manifest {
                message: format!(
                    "Invalid [{MANAGEMENT_TABLE}] key '{bad}'. Expected group:artifact"
                ),
            }
            .into());
        }
        Ok(manifest)
    }

    fn section(&self, section: DependencySection) -> &BTreeMap<String, Dependency> {
        match section {
            DependencySection::Dependencies => &self.dependencies,
            DependencySection::DevDependencies => &self.dev_dependencies,
        }
    }

    /// Keys of every direct declaration of `coord`, with the section they live in.
    pub fn declarations_of(&self, coord: &Coordinate) -> Vec<(DependencySection, String)> {
        DependencySection::ALL
            .into_iter()
            .flat_map(|section| {
                self.section(section)
                    .iter()
                    .filter(|(_, dep)| dep.coordinate().as_ref() == Some(coord))
                    .map(move |(key, _)| (section, key.clone()))
            })
            .collect()
    }

    /// The centrally pinned version for `coord`, if any.
    pub fn managed_version(&self, coord: &Coordinate) -> Option<&str> {
        self.dependency_management
            .get(&coord.to_string())
            .map(String::as_str)
    }
}
