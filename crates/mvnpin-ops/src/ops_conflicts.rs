//! Operation: report version conflicts in an exported dependency tree.

use std::path::Path;

use mvnpin_core::config::{MismatchPolicy, ResolveConfig};
use mvnpin_core::tree::DependencyTree;
use mvnpin_resolver::conflict::{self, ConflictReport};
use mvnpin_resolver::graph;
use mvnpin_util::errors::{MvnpinError, MvnpinResult};

/// Options for `mvnpin conflicts`.
#[derive(Default)]
pub struct ConflictsOptions {
    /// Override the configured flattening depth.
    pub max_depth: Option<usize>,
    /// Print the report as JSON instead of text.
    pub json: bool,
}

/// Print the conflicts found in the tree at `tree_path`.
pub fn conflicts(tree_path: &Path, opts: &ConflictsOptions) -> MvnpinResult<ConflictReport> {
    let config = crate::resolve_config(opts.max_depth)?;
    let tree = DependencyTree::from_path(tree_path)?;
    let report = analyze(&tree, &config)?;
    print!("{}", render(&report, opts.json)?);
    Ok(report)
}

/// Flatten and resolve a tree, then apply the metadata mismatch policy.
pub fn analyze(tree: &DependencyTree, config: &ResolveConfig) -> MvnpinResult<ConflictReport> {
    let groups = graph::flatten_to_depth(&tree.dependencies, config.max_depth);
    let report = conflict::resolve(&groups);
    check_mismatches(&report, config.on_metadata_mismatch)?;
    Ok(report)
}

fn check_mismatches(report: &ConflictReport, policy: MismatchPolicy) -> MvnpinResult<()> {
    let Some(first) = report.mismatches.first() else {
        return Ok(());
    };
    match policy {
        MismatchPolicy::Ignore => Ok(()),
        MismatchPolicy::Warn => {
            for m in &report.mismatches {
                tracing::warn!("metadata mismatch: {m}");
            }
            Ok(())
        }
        MismatchPolicy::Deny => Err(MvnpinError::Resolution {
            message: format!(
                "{} metadata mismatch(es) among conflicting duplicates, first: {first}",
                report.mismatches.len()
            ),
        }
        .into()),
    }
}

/// Text or pretty JSON rendering of a report.
pub fn render(report: &ConflictReport, json: bool) -> MvnpinResult<String> {
    if !json {
        return Ok(report.to_string());
    }
    let mut out = serde_json::to_string_pretty(report).map_err(|e| MvnpinError::Generic {
        message: format!("Failed to serialize report: {e}"),
    })?;
    out.push('\n');
    Ok(out)
}
