//! Subcommand implementations. Each module exposes a single `run` that
//! takes its parsed arguments and returns a [`CliResult`].

use std::fs;
use std::path::Path;

use billform_core::InvoiceRecord;

use crate::error::{CliError, CliResult};

pub mod generate;
pub mod validate;
pub mod words;

/// Read and deserialize a form-state JSON file into an [`InvoiceRecord`].
pub(crate) fn load_record(path: &Path) -> CliResult<InvoiceRecord> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
