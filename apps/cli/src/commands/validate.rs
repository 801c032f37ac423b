//! `billform validate` - run both validation tiers against a form-state
//! file and report every problem found, without computing amounts.

use std::path::PathBuf;

use billform_core::{incomplete_sections, validate, SubmitError};
use clap::Args;
use tracing::info;

use crate::commands::load_record;
use crate::error::{CliError, CliResult};

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Form-state JSON file to check
    #[arg(long, short)]
    pub file: PathBuf,
}

pub fn run(args: &ValidateArgs) -> CliResult<()> {
    let record = load_record(&args.file)?;
    info!(file = %args.file.display(), "validating invoice record");

    let sections = incomplete_sections(&record);
    if !sections.is_empty() {
        return Err(CliError::Submit(SubmitError::IncompleteSections(sections)));
    }

    let errors = validate(&record);
    if !errors.is_empty() {
        return Err(CliError::Submit(SubmitError::InvalidFields(errors)));
    }

    println!("{} is valid.", args.file.display());
    Ok(())
}
