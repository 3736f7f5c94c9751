use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all mvnpin operations.
#[derive(Debug, Error, Diagnostic)]
pub enum MvnpinError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed project manifest (Mvnpin.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Mvnpin.toml for syntax errors"))]
    Manifest { message: String },

    /// The dependency tree handed to mvnpin is missing or malformed.
    #[error("Invalid dependency tree: {message}")]
    #[diagnostic(help("Regenerate the dependency tree export and try again"))]
    Tree { message: String },

    /// Conflict resolution could not produce a trustworthy result.
    #[error("Conflict resolution failed: {message}")]
    Resolution { message: String },

    /// Global configuration could not be read or parsed.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check ~/.mvnpin/config.toml"))]
    Config { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type MvnpinResult<T> = miette::Result<T>;
