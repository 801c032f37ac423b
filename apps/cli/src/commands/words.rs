//! `billform words` - spell an amount out the way it appears on the
//! printed invoice.

use billform_core::amount_text_to_words;
use clap::Args;

use crate::error::CliResult;

#[derive(Debug, Args)]
pub struct WordsArgs {
    /// Amount to spell out, e.g. 1234.50
    #[arg(long, short)]
    pub amount: String,
}

pub fn run(args: &WordsArgs) -> CliResult<()> {
    // Unparseable input prints the sentinel rather than failing: the form
    // shows "Invalid input" inline for the same case.
    println!("{}", amount_text_to_words(&args.amount));
    Ok(())
}
