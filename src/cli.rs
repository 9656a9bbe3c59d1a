//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

/// Default program file when no input is given
pub const DEFAULT_INPUT: &str = "input.gcode";

/// Rewrites travel moves of a G-code file into distance-aware z-hops
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// G-code file to process; rewritten in place unless --output is given
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Settings file (INI, or TOML/JSON by extension)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the result here instead of over the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Process the file but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Print processing statistics as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Destination of the rewritten program
    pub fn output_path(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.input)
    }
}
