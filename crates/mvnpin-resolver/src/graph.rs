//! Flattening of a dependency tree into per-coordinate buckets.

use std::collections::HashMap;

use mvnpin_core::config::DEFAULT_MAX_DEPTH;
use mvnpin_core::dependency::Coordinate;
use mvnpin_core::tree::DependencyNode;

/// One place in the tree where a coordinate shows up.
#[derive(Debug, Clone, Copy)]
pub struct Occurrence<'a> {
    pub node: &'a DependencyNode,
    /// 0 for direct dependencies of the project.
    pub depth: usize,
}

impl Occurrence<'_> {
    pub fn version(&self) -> &str {
        &self.node.version
    }
}

/// Every node of a tree grouped by its own coordinate.
///
/// Occurrences inside a bucket are in traversal order (pre-order, depth-first),
/// so the first entry is the one closest to the start of the tree.
#[derive(Debug, Default)]
pub struct CoordinateGroups<'a> {
    buckets: HashMap<Coordinate, Vec<Occurrence<'a>>>,
    truncated: usize,
}

impl<'a> CoordinateGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: &'a DependencyNode, depth: usize) {
        self.buckets
            .entry(node.coordinate())
            .or_default()
            .push(Occurrence { node, depth });
    }

    /// Occurrences of a coordinate, in traversal order.
    pub fn get(&self, coord: &Coordinate) -> Option<&[Occurrence<'a>]> {
        self.buckets.get(coord).map(Vec::as_slice)
    }

    /// All buckets, ordered by coordinate (group, then artifact).
    pub fn sorted(&self) -> Vec<(&Coordinate, &[Occurrence<'a>])> {
        let mut entries: Vec<_> = self
            .buckets
            .iter()
            .map(|(coord, occurrences)| (coord, occurrences.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Number of distinct coordinates.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of nodes grouped, across all buckets.
    pub fn node_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Number of subtrees skipped because they started below the depth bound.
    pub fn truncated(&self) -> usize {
        self.truncated
    }
}

/// Group every node of the tree by coordinate, down to [`DEFAULT_MAX_DEPTH`].
pub fn flatten(roots: &[DependencyNode]) -> CoordinateGroups<'_> {
    flatten_to_depth(roots, DEFAULT_MAX_DEPTH)
}

/// Group every node of the tree by coordinate.
///
/// Root nodes sit at depth 0. A node deeper than `max_depth` is left out
/// together with its whole subtree; this only bounds the work on absurdly
/// deep exports and is not reported as an error.
pub fn flatten_to_depth(roots: &[DependencyNode], max_depth: usize) -> CoordinateGroups<'_> {
    let mut groups = CoordinateGroups::new();
    let mut stack: Vec<(&DependencyNode, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        if depth > max_depth {
            groups.truncated += 1;
            continue;
        }
        groups.push(node, depth);
        stack.extend(node.dependencies.iter().rev().map(|child| (child, depth + 1)));
    }

    if groups.truncated > 0 {
        tracing::debug!(
            "skipped {} subtree(s) deeper than {max_depth} levels",
            groups.truncated
        );
    }
    tracing::debug!(
        "flattened {} node(s) into {} coordinate(s)",
        groups.node_count(),
        groups.len()
    );
    groups
}
