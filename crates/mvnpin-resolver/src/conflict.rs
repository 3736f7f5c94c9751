//! Version conflict detection and winner selection.

use std::fmt;

use serde::Serialize;

use mvnpin_core::dependency::Coordinate;
use mvnpin_core::tree::ArtifactMetadata;

use crate::graph::{CoordinateGroups, Occurrence};
use crate::version::max_version;

/// All conflicts found in one tree, ordered by coordinate.
#[derive(Debug, Default, Serialize)]
pub struct ConflictReport {
    pub resolutions: Vec<ConflictResolution>,
    pub mismatches: Vec<MetadataMismatch>,
}

/// A library requested at more than one version, and the version that wins.
#[derive(Debug, Clone, Serialize)]
pub struct ConflictResolution {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub version: String,
    /// Distinct versions found in the tree, in traversal order.
    pub requested: Vec<String>,
    /// Taken from the first occurrence of the coordinate.
    pub metadata: ArtifactMetadata,
}

/// Two occurrences of a conflicted library disagree on something besides
/// the version, so the carried-forward metadata may be wrong for some of them.
#[derive(Debug, Clone, Serialize)]
pub struct MetadataMismatch {
    #[serde(flatten)]
    pub coordinate: Coordinate,
    pub field: &'static str,
    /// Value on the first occurrence (the one carried forward).
    pub expected: String,
    pub found: String,
    /// Version and depth of the disagreeing occurrence.
    pub version: String,
    pub depth: usize,
}

impl ConflictReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, resolution: ConflictResolution) {
        self.resolutions.push(resolution);
    }

    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    pub fn find(&self, coord: &Coordinate) -> Option<&ConflictResolution> {
        self.resolutions.iter().find(|r| &r.coordinate == coord)
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resolutions.is_empty() {
            return writeln!(f, "No version conflicts.");
        }
        writeln!(f, "Version conflicts ({}):", self.resolutions.len())?;
        for r in &self.resolutions {
            writeln!(f, "  {r}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ConflictResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {}",
            self.coordinate,
            self.requested.join(", "),
            self.version
        )
    }
}

impl fmt::Display for MetadataMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: `{}` is {:?} on the first occurrence but {:?} on {} at depth {}",
            self.coordinate, self.field, self.expected, self.found, self.version, self.depth
        )
    }
}

/// Find every coordinate present at more than one version and pick its winner.
///
/// Single-version coordinates produce nothing, however often they repeat.
pub fn resolve(groups: &CoordinateGroups<'_>) -> ConflictReport {
    let mut report = ConflictReport::new();

    for (coord, occurrences) in groups.sorted() {
        if !has_conflict(occurrences) {
            continue;
        }
        let Some(version) = max_version(occurrences.iter().map(|o| o.version())) else {
            continue;
        };

        let first = occurrences[0];
        let metadata = first.node.metadata();
        for other in &occurrences[1..] {
            for (field, expected, found) in metadata.differences(&other.node.metadata()) {
                let mismatch = MetadataMismatch {
                    coordinate: coord.clone(),
                    field,
                    expected,
                    found,
                    version: other.version().to_string(),
                    depth: other.depth,
                };
                tracing::debug!("{mismatch}");
                report.mismatches.push(mismatch);
            }
        }

        let resolution = ConflictResolution {
            coordinate: coord.clone(),
            version: version.to_string(),
            requested: distinct_versions(occurrences),
            metadata,
        };
        tracing::debug!("{resolution}");
        report.add(resolution);
    }

    report
}

/// True when some occurrence's version differs from the first one's.
pub fn has_conflict(occurrences: &[Occurrence<'_>]) -> bool {
    match occurrences.split_first() {
        Some((first, rest)) => rest.iter().any(|o| o.version() != first.version()),
        None => false,
    }
}

fn distinct_versions(occurrences: &[Occurrence<'_>]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for o in occurrences {
        if !seen.iter().any(|v| v == o.version()) {
            seen.push(o.version().to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::flatten;
    use mvnpin_core::dependency::DependencyScope;
    use mvnpin_core::tree::DependencyNode;

    fn node(group: &str, artifact: &str, version: &str) -> DependencyNode {
        DependencyNode::new(group, artifact, version)
    }

    #[test]
    fn empty_report() {
        let report = ConflictReport::new();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "No version conflicts.\n");
    }

    #[test]
    fn end_to_end_picks_max_and_first_metadata() {
        // X 1.0 at the root, X 1.1 three levels down, Y 2.0 twice.
        let mut root_x = node("org.x", "x", "1.0");
        root_x.classifier = Some("root".to_string());
        let roots = vec![root_x.with_dependencies(vec![node("org.y", "y", "2.0")
            .with_dependencies(vec![node("org.y", "y", "2.0")
                .with_dependencies(vec![node("org.x", "x", "1.1")])])])];

        let groups = flatten(&roots);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups.get(&Coordinate::new("org.x", "x")).unwrap()[1].depth,
            3
        );

        let report = resolve(&groups);
        assert_eq!(report.len(), 1);
        let x = report.find(&Coordinate::new("org.x", "x")).unwrap();
        assert_eq!(x.version, "1.1");
        assert_eq!(x.requested, ["1.0", "1.1"]);
        assert_eq!(x.metadata.classifier.as_deref(), Some("root"));
        assert!(report.find(&Coordinate::new("org.y", "y")).is_none());
    }

    #[test]
    fn repeated_single_version_is_not_a_conflict() {
        let roots = vec![
            node("g", "a", "1.0"),
            node("g", "a", "1.0"),
            node("g", "a", "1.0"),
        ];
        let report = resolve(&flatten(&roots));
        assert!(report.is_empty());
    }

    #[test]
    fn numerically_equal_but_textually_different_is_a_conflict() {
        let roots = vec![node("g", "a", "1.0"), node("g", "a", "1.00")];
        let report = resolve(&flatten(&roots));
        assert_eq!(report.len(), 1);
        // Tie: the earliest maximal version is kept.
        assert_eq!(report.resolutions[0].version, "1.0");
    }

    #[test]
    fn one_resolution_per_conflicted_coordinate() {
        let roots = vec![
            node("g", "a", "1"),
            node("g", "a", "2"),
            node("g", "a", "3"),
            node("g", "b", "1").with_dependencies(vec![node("g", "b", "1.5")]),
            node("g", "c", "9"),
        ];
        let report = resolve(&flatten(&roots));
        let found: Vec<(String, &str)> = report
            .resolutions
            .iter()
            .map(|r| (r.coordinate.to_string(), r.version.as_str()))
            .collect();
        assert_eq!(
            found,
            [("g:a".to_string(), "3"), ("g:b".to_string(), "1.5")]
        );
    }

    #[test]
    fn output_is_sorted_by_coordinate() {
        let roots = vec![
            node("org.z", "z", "1"),
            node("org.z", "z", "2"),
            node("com.a", "a", "1"),
            node("com.a", "a", "2"),
        ];
        let report = resolve(&flatten(&roots));
        let keys: Vec<String> = report
            .resolutions
            .iter()
            .map(|r| r.coordinate.to_string())
            .collect();
        assert_eq!(keys, ["com.a:a", "org.z:z"]);
    }

    #[test]
    fn metadata_mismatch_is_reported() {
        let mut test_scoped = node("g", "a", "2.0");
        test_scoped.scope = DependencyScope::Test;
        let roots = vec![node("g", "a", "1.0").with_dependencies(vec![test_scoped])];

        let report = resolve(&flatten(&roots));
        assert_eq!(report.len(), 1);
        assert_eq!(report.resolutions[0].metadata.scope, DependencyScope::Compile);
        assert_eq!(report.mismatches.len(), 1);
        let m = &report.mismatches[0];
        assert_eq!(m.field, "scope");
        assert_eq!(m.expected, "compile");
        assert_eq!(m.found, "test");
        assert_eq!(m.version, "2.0");
        assert_eq!(m.depth, 1);
        assert!(m.to_string().contains("g:a: `scope`"));
    }

    #[test]
    fn non_conflicted_coordinates_are_not_checked_for_metadata() {
        let mut optional = node("g", "a", "1.0");
        optional.optional = true;
        let roots = vec![node("g", "a", "1.0"), optional];
        let report = resolve(&flatten(&roots));
        assert!(report.is_empty());
        assert!(report.mismatches.is_empty());
    }

    #[test]
    fn report_display_lists_conflicts() {
        let roots = vec![node("org.example", "lib", "1.0"), node("org.example", "lib", "2.0")];
        let report = resolve(&flatten(&roots));
        let s = report.to_string();
        assert!(s.starts_with("Version conflicts (1):"));
        assert!(s.contains("org.example:lib 1.0, 2.0 -> 2.0"));
    }

    #[test]
    fn has_conflict_edge_cases() {
        assert!(!has_conflict(&[]));
        let a = node("g", "a", "1");
        let b = node("g", "a", "2");
        let one = [Occurrence { node: &a, depth: 0 }];
        assert!(!has_conflict(&one));
        let two = [Occurrence { node: &a, depth: 0 }, Occurrence { node: &b, depth: 1 }];
        assert!(has_conflict(&two));
    }
}
