//! Handler for `mvnpin conflicts`.

use std::path::Path;

use miette::Result;

use mvnpin_ops::ops_conflicts::{self, ConflictsOptions};

pub fn exec(tree: &Path, json: bool, max_depth: Option<usize>) -> Result<()> {
    let opts = ConflictsOptions { max_depth, json };
    ops_conflicts::conflicts(tree, &opts)?;
    Ok(())
}
