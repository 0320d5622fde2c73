//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Print the task outline of Rake build files
#[derive(Parser, Debug)]
#[command(name = "rake-outline", version, about = "Print the task outline of a Rakefile")]
pub struct CliArgs {
    /// Rake files to outline (Rakefile or *.rake)
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Emit LSP-shaped JSON instead of an indented tree
    #[arg(long)]
    pub json: bool,

    /// Outline a file even if its name does not look like a Rake file
    #[arg(long)]
    pub force: bool,
}
