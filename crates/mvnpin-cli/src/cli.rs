//! CLI argument definitions for mvnpin.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mvnpin",
    version,
    about = "Find and pin conflicting dependency versions",
    long_about = "mvnpin reads an exported dependency tree, finds every library present at \
                  more than one version, and pins the highest version of each in the \
                  [dependency-management] section of Mvnpin.toml."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List libraries present at more than one version
    Conflicts {
        /// Exported dependency tree (JSON)
        #[arg(short, long, default_value = mvnpin_core::DEFAULT_TREE_FILE)]
        tree: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Ignore tree nodes deeper than this
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Pin the winning versions in Mvnpin.toml
    Pin {
        /// Exported dependency tree (JSON)
        #[arg(short, long, default_value = mvnpin_core::DEFAULT_TREE_FILE)]
        tree: PathBuf,
        /// Project manifest (defaults to the nearest Mvnpin.toml)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
        /// Show what would change without writing
        #[arg(long)]
        dry_run: bool,
        /// Ignore tree nodes deeper than this
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Compare two version strings
    Compare {
        /// First version
        a: String,
        /// Second version
        b: String,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
