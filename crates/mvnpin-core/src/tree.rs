//! The exported, already-resolved dependency tree that mvnpin analyses.
//!
//! The tree is produced by the build tool (e.g. from `mvn dependency:tree`)
//! and handed over as JSON:
//!
//! ```json
//! { "project": "com.example:app",
//!   "dependencies": [
//!     { "group": "org.a", "artifact": "a", "version": "1.0",
//!       "dependencies": [ { "group": "org.b", "artifact": "b", "version": "2.0" } ] }
//!   ] }
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mvnpin_util::errors::{MvnpinError, MvnpinResult};

use crate::dependency::{Coordinate, DependencyScope};

/// The root of an exported dependency tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DependencyTree {
    /// Free-form label of the project the tree was exported from.
    #[serde(default)]
    pub project: Option<String>,
    /// Direct dependencies of the project, each with its own subtree.
    pub dependencies: Vec<DependencyNode>,
}

/// One artifact in the tree together with its own transitive dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    pub group: String,
    pub artifact: String,
    pub version: String,
    #[serde(default = "default_packaging", rename = "type")]
    pub packaging: String,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub scope: DependencyScope,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

fn default_packaging() -> String {
    "jar".to_string()
}

/// Everything that describes an artifact besides its coordinate and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    #[serde(rename = "type")]
    pub packaging: String,
    pub classifier: Option<String>,
    pub scope: DependencyScope,
    pub optional: bool,
}

impl ArtifactMetadata {
    /// Fields on which `other` disagrees with `self`, as `(field, ours, theirs)`.
    pub fn differences(&self, other: &Self) -> Vec<(&'static str, String, String)> {
        let mut diffs = Vec::new();
        if self.packaging != other.packaging {
            diffs.push(("type", self.packaging.clone(), other.packaging.clone()));
        }
        if self.classifier != other.classifier {
            diffs.push((
                "classifier",
                self.classifier.clone().unwrap_or_default(),
                other.classifier.clone().unwrap_or_default(),
            ));
        }
        if self.scope != other.scope {
            diffs.push(("scope", self.scope.to_string(), other.scope.to_string()));
        }
        if self.optional != other.optional {
            diffs.push((
                "optional",
                self.optional.to_string(),
                other.optional.to_string(),
            ));
        }
        diffs
    }
}

impl DependencyNode {
    /// Build a leaf node with default metadata (`jar`, compile scope).
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            packaging: default_packaging(),
            classifier: None,
            scope: DependencyScope::Compile,
            optional: false,
            dependencies: Vec::new(),
        }
    }

    /// Attach children, builder style.
    pub fn with_dependencies(mut self, dependencies: Vec<DependencyNode>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group, &self.artifact)
    }

    pub fn metadata(&self) -> ArtifactMetadata {
        ArtifactMetadata {
            packaging: self.packaging.clone(),
            classifier: self.classifier.clone(),
            scope: self.scope,
            optional: self.optional,
        }
    }
}

// Deep trees would otherwise drop recursively, one frame per level.
impl Drop for DependencyNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.dependencies);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.dependencies);
        }
    }
}

impl fmt::Display for DependencyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl DependencyTree {
    pub fn new(dependencies: Vec<DependencyNode>) -> Self {
        Self {
            project: None,
            dependencies,
        }
    }

    /// Load and validate a JSON tree export.
    pub fn from_path(path: &Path) -> MvnpinResult<Self> {
        let content = mvnpin_util::fs::read_to_string(path).map_err(|e| MvnpinError::Tree {
            message: format!("Failed to read tree: {e}"),
        })?;
        Self::from_str(&content)
    }

    /// Parse and validate a JSON tree export.
    ///
    /// Nesting depth is unbounded here: every tree level costs two JSON
    /// levels, and the flattener applies its own depth bound later.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> MvnpinResult<Self> {
        let parse_error = |e: serde_json::Error| MvnpinError::Tree {
            message: format!("Failed to parse tree: {e}"),
        };
        let mut json = serde_json::Deserializer::from_str(content);
        json.disable_recursion_limit();
        let tree = Self::deserialize(serde_stacker::Deserializer::new(&mut json))
            .map_err(parse_error)?;
        json.end().map_err(parse_error)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Reject nodes with an empty group, artifact or version.
    ///
    /// Walks iteratively, so arbitrarily deep trees cannot overflow the stack.
    pub fn validate(&self) -> MvnpinResult<()> {
        let mut stack: Vec<(&DependencyNode, usize, Option<&DependencyNode>)> = self
            .dependencies
            .iter()
            .rev()
            .map(|n| (n, 0, None))
            .collect();

        while let Some((node, depth, parent)) = stack.pop() {
            let missing = [
                ("group", &node.group),
                ("artifact", &node.artifact),
                ("version", &node.version),
            ]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty());

            if let Some((field, _)) = missing {
                let location = match parent {
                    Some(p) => format!("under {p}"),
                    None => "at the root".to_string(),
                };
                return Err(MvnpinError::Tree {
                    message: format!("empty `{field}` on node {node} at depth {depth} {location}"),
                }
                .into());
            }

            stack.extend(
                node.dependencies
                    .iter()
                    .rev()
                    .map(|child| (child, depth + 1, Some(node))),
            );
        }
        Ok(())
    }

    /// Total number of nodes in the tree, at any depth.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&DependencyNode> = self.dependencies.iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.dependencies.iter());
        }
        count
    }
}
