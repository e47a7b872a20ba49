//! Error types for the chalk command line

use std::path::PathBuf;

use thiserror::Error;

/// Errors in how chalk was invoked
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("Unknown format '{0}' (expected text, html or tree)")]
    UnknownFormat(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),
}
