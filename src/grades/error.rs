use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a grade report from being produced.
#[derive(Debug, Error)]
pub enum GradeError {
    #[error("Failed to read grade file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write grade report '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
