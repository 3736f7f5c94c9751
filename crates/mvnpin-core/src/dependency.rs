use std::fmt;

use serde::{Deserialize, Serialize};

/// Library identity: `group:artifact`, ignoring the version.
///
/// Ordering is by group, then artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
        }
    }

    /// Parse `"group:artifact"`.
    pub fn parse(s: &str) -> Option<Self> {
        let (group, artifact) = s.split_once(':')?;
        if group.is_empty() || artifact.is_empty() || artifact.contains(':') {
            return None;
        }
        Some(Self::new(group, artifact))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.artifact)
    }
}

/// A direct dependency declaration in Mvnpin.toml.
///
/// Supports both shorthand (`"group:artifact[:version]"`) and detailed forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    Short(String),
    Detailed(DetailedDependency),
}

/// A dependency with explicit group and artifact, and optional metadata.
///
/// `version` is absent once the version is managed centrally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedDependency {
    pub group: String,
    pub artifact: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub scope: Option<DependencyScope>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub classifier: Option<String>,
}

impl Dependency {
    /// The declared coordinate, or `None` for an unparseable short form.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Dependency::Short(s) => MavenCoordinate::parse(s).map(|c| c.coordinate()),
            Dependency::Detailed(d) => Some(Coordinate::new(&d.group, &d.artifact)),
        }
    }

    /// The explicit version, if the declaration carries one.
    pub fn version(&self) -> Option<String> {
        match self {
            Dependency::Short(s) => MavenCoordinate::parse(s).and_then(|c| c.version),
            Dependency::Detailed(d) => d.version.clone(),
        }
    }
}

/// Maven dependency scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyScope {
    #[default]
    Compile,
    Provided,
    Runtime,
    Test,
    System,
    Import,
}

impl fmt::Display for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Compile => "compile",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
            Self::Test => "test",
            Self::System => "system",
            Self::Import => "import",
        };
        f.write_str(s)
    }
}

/// Maven coordinates parsed from a shorthand string, version optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
}

impl MavenCoordinate {
    /// Parse `"group:artifact"` or `"group:artifact:version"`.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        match parts.as_slice() {
            [group, artifact] => Some(Self {
                group_id: group.to_string(),
                artifact_id: artifact.to_string(),
                version: None,
            }),
            [group, artifact, version] => Some(Self {
                group_id: group.to_string(),
                artifact_id: artifact.to_string(),
                version: Some(version.to_string()),
            }),
            _ => None,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id)
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        if let Some(ref v) = self.version {
            write!(f, ":{v}")?;
        }
        Ok(())
    }
}
