//! Command-line arguments for the `inti` binary.

use clap::Parser;

/// Parse source files, or start an interactive session when none is given.
#[derive(Parser, Debug)]
#[command(name = "inti", version, about = "Tokenizer and Pratt parser for the inti language")]
pub struct Cli {
    /// Print the BEGIN/END trace of the productions the parser enters
    #[arg(long)]
    pub trace: bool,

    /// Print the token stream before parsing
    #[arg(long)]
    pub tokens: bool,

    /// Source file to parse
    pub file: Option<String>,
}
