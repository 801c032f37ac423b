//! # Billform CLI
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        billform-cli                         │
//! │                                                             │
//! │   ┌──────────┐   ┌──────────────────┐   ┌───────────────┐   │
//! │   │ validate │   │     generate     │   │     words     │   │
//! │   │  (check) │   │ (submit + plan)  │   │ (spell-out)   │   │
//! │   └────┬─────┘   └────────┬─────────┘   └──────┬────────┘   │
//! │        └──────────────────┼────────────────────┘            │
//! │                           ▼                                 │
//! │                     billform-core                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Argument parsing and dispatch live here so the binary stays a stub and
//! the commands stay testable.

use clap::{Parser, Subcommand};

pub mod commands;
pub mod error;

pub use error::{CliError, CliResult};

#[derive(Debug, Parser)]
#[command(name = "billform", version, about = "Invoice form validation and document planning")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a form-state file against both validation tiers
    Validate(commands::validate::ValidateArgs),
    /// Submit a form-state file and write its document plan
    Generate(commands::generate::GenerateArgs),
    /// Spell an amount out in words
    Words(commands::words::WordsArgs),
}

pub fn run(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Command::Validate(args) => commands::validate::run(args),
        Command::Generate(args) => commands::generate::run(args),
        Command::Words(args) => commands::words::run(args),
    }
}
