//! Operation: pin conflicting versions in `[dependency-management]` of Mvnpin.toml.

use std::path::Path;

use mvnpin_core::dependency::{Coordinate, MavenCoordinate};
use mvnpin_core::manifest::{Manifest, MANAGEMENT_TABLE};
use mvnpin_core::tree::DependencyTree;
use mvnpin_resolver::conflict::ConflictResolution;
use mvnpin_util::errors::{MvnpinError, MvnpinResult};
use mvnpin_util::status;
use toml_edit::{DocumentMut, Item, Table, Value};

use crate::ops_conflicts::analyze;

/// Options for `mvnpin pin`.
#[derive(Default)]
pub struct PinOptions {
    /// Override the configured flattening depth.
    pub max_depth: Option<usize>,
    /// Compute and print the changes without writing the manifest.
    pub dry_run: bool,
}

/// What a pin run changed (or would change, on a dry run).
#[derive(Debug, Default)]
pub struct PinSummary {
    /// Coordinates pinned, with the version written.
    pub pinned: Vec<(Coordinate, String)>,
    /// Direct declarations whose explicit version was removed, as `table.key`.
    pub cleared: Vec<String>,
}

impl PinSummary {
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty()
    }
}

/// Resolve the conflicts in `tree_path` and pin the winners in the manifest.
pub fn pin(manifest_path: &Path, tree_path: &Path, opts: &PinOptions) -> MvnpinResult<PinSummary> {
    let config = crate::resolve_config(opts.max_depth)?;
    let tree = DependencyTree::from_path(tree_path)?;
    let report = analyze(&tree, &config)?;

    if report.is_empty() {
        status::status_info("Finished", "no version conflicts, nothing to pin");
        return Ok(PinSummary::default());
    }

    let summary = apply_resolutions(manifest_path, &report.resolutions, opts.dry_run)?;

    let verb = if opts.dry_run { "Would pin" } else { "Pinned" };
    for (coord, version) in &summary.pinned {
        status::status(verb, &format!("{coord} {version}"));
    }
    let verb = if opts.dry_run { "Would clear" } else { "Cleared" };
    for key in &summary.cleared {
        status::status_info(verb, &format!("version of {key}"));
    }
    if opts.dry_run {
        status::status_warn("Dry run", "manifest left untouched");
    }

    Ok(summary)
}

/// Write resolutions into the manifest using format-preserving edits.
///
/// Every resolution is upserted into `[dependency-management]` as
/// `"group:artifact" = "version"`, and every direct declaration of the same
/// coordinate loses its explicit version so the pinned one applies.
pub fn apply_resolutions(
    manifest_path: &Path,
    resolutions: &[ConflictResolution],
    dry_run: bool,
) -> MvnpinResult<PinSummary> {
    let content = mvnpin_util::fs::read_to_string(manifest_path).map_err(|e| {
        MvnpinError::Manifest {
            message: format!("Failed to read manifest: {e}"),
        }
    })?;
    let manifest = Manifest::from_str(&content)?;
    let mut doc: DocumentMut = content.parse().map_err(|e| MvnpinError::Manifest {
        message: format!("Failed to parse Mvnpin.toml: {e}"),
    })?;

    let mut summary = PinSummary::default();
    for resolution in resolutions {
        let coord = &resolution.coordinate;
        if let Some(previous) = manifest.managed_version(coord) {
            if previous != resolution.version {
                tracing::debug!("replacing pinned {coord} {previous} with {}", resolution.version);
            }
        }

        ensure_table(&mut doc, MANAGEMENT_TABLE);
        doc[MANAGEMENT_TABLE][&coord.to_string()] = toml_edit::value(resolution.version.clone());
        summary.pinned.push((coord.clone(), resolution.version.clone()));

        for (section, key) in manifest.declarations_of(coord) {
            if clear_version(&mut doc, section.table(), &key) {
                summary.cleared.push(format!("{}.{key}", section.table()));
            }
        }
    }

    if !dry_run {
        std::fs::write(manifest_path, doc.to_string()).map_err(MvnpinError::Io)?;
    }
    Ok(summary)
}

/// Remove the explicit version from the declaration at `[table].key`.
///
/// Returns `false` when the declaration has no version to remove.
fn clear_version(doc: &mut DocumentMut, table: &str, key: &str) -> bool {
    let Some(item) = doc.get_mut(table).and_then(|t| t.get_mut(key)) else {
        return false;
    };
    match item {
        Item::Value(Value::String(s)) => {
            let Some(coord) = MavenCoordinate::parse(s.value()) else {
                return false;
            };
            if coord.version.is_none() {
                return false;
            }
            let decor = s.decor().clone();
            let mut unversioned = Value::from(coord.coordinate().to_string());
            *unversioned.decor_mut() = decor;
            *item = Item::Value(unversioned);
            true
        }
        Item::Value(Value::InlineTable(t)) => t.remove("version").is_some(),
        Item::Table(t) => t.remove("version").is_some(),
        _ => false,
    }
}

/// Ensure a top-level table exists in the document.
fn ensure_table(doc: &mut DocumentMut, key: &str) {
    if !doc.contains_key(key) {
        doc.insert(key, Item::Table(Table::new()));
    }
}
