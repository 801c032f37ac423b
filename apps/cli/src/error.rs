//! CLI error type. Core rejections pass through with their user-facing
//! messages intact; I/O and parse failures carry the offending path.

use std::path::PathBuf;

use billform_core::SubmitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid invoice JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize document plan: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

pub type CliResult<T> = Result<T, CliError>;
