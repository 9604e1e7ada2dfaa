//! # CLI Error Type
//!
//! Failures of the console layer itself. Business outcomes from the store
//! (`CoreError`) are printed as status lines and never end up here.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Reading from stdin or writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read catalog {}: {source}", .path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {}: {source}", .path.display())]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type CliResult<T> = Result<T, CliError>;
