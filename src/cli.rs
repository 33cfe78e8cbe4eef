//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::config::{ExtractOptions, DEFAULT_MARKER};

/// Extract tagged documentation from a TypeScript declaration file
#[derive(Parser, Debug)]
#[command(name = "docmd")]
#[command(about = "Reads <BASE>.d.ts and writes its documented declarations to <BASE>.d.json")]
#[command(version)]
pub struct Cli {
    /// Base path: `<BASE>.d.ts` is read and `<BASE>.d.json` is written
    #[arg(value_name = "BASE")]
    pub base: PathBuf,

    /// Tag a JSDoc comment must start with to be recorded
    #[arg(long, env = "DOCMD_MARKER", default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// Print the parsed syntax tree to stderr before extracting
    #[arg(long)]
    pub print_ast: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Extraction options selected on the command line
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions::with_marker(self.marker.clone())
    }
}
