//! Command dispatch and handler modules.

mod compare;
mod conflicts;
mod pin;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Conflicts {
            tree,
            json,
            max_depth,
        } => conflicts::exec(&tree, json, max_depth),
        Command::Pin {
            tree,
            manifest,
            dry_run,
            max_depth,
        } => pin::exec(&tree, manifest.as_deref(), dry_run, max_depth),
        Command::Compare { a, b } => compare::exec(&a, &b),
    }
}
