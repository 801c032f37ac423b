//! `billform generate` - submit a form-state file and write the resulting
//! document plan as JSON, ready for a renderer to lay out.

use std::fs;
use std::path::PathBuf;

use billform_core::{document_plan, submit};
use clap::Args;
use tracing::info;

use crate::commands::load_record;
use crate::error::{CliError, CliResult};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Form-state JSON file to submit
    #[arg(long, short)]
    pub file: PathBuf,

    /// Where to write the document plan
    #[arg(long, short, default_value = "invoice-plan.json")]
    pub out: PathBuf,
}

pub fn run(args: &GenerateArgs) -> CliResult<()> {
    let record = load_record(&args.file)?;
    let snapshot = submit(&record)?;
    info!(id = %snapshot.id, items = snapshot.items.len(), "invoice submitted");

    let plan = document_plan(&snapshot);
    let json = serde_json::to_string_pretty(&plan)?;
    fs::write(&args.out, json).map_err(|source| CliError::Write {
        path: args.out.clone(),
        source,
    })?;

    println!(
        "Invoice {}: {} item(s), total {} ({}).",
        snapshot.record.invoice_number,
        snapshot.items.len(),
        snapshot.totals.total_amount,
        snapshot.amount_in_words,
    );
    println!("Document plan written to {}.", args.out.display());
    Ok(())
}
