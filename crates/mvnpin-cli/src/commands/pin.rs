//! Handler for `mvnpin pin`.

use std::path::{Path, PathBuf};

use miette::Result;

use mvnpin_ops::ops_pin::{self, PinOptions};
use mvnpin_util::errors::MvnpinError;

pub fn exec(
    tree: &Path,
    manifest: Option<&Path>,
    dry_run: bool,
    max_depth: Option<usize>,
) -> Result<()> {
    let manifest_path = match manifest {
        Some(path) => path.to_path_buf(),
        None => find_manifest()?,
    };

    let opts = PinOptions { max_depth, dry_run };
    ops_pin::pin(&manifest_path, tree, &opts)?;
    Ok(())
}

fn find_manifest() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(MvnpinError::Io)?;
    mvnpin_util::fs::find_in_ancestors(&cwd, mvnpin_core::MANIFEST_FILE).ok_or_else(|| {
        MvnpinError::Manifest {
            message: format!(
                "No {} found in current directory or any parent",
                mvnpin_core::MANIFEST_FILE
            ),
        }
        .into()
    })
}
