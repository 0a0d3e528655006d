//! CLI argument definitions using clap derive API

use clap::{Args, Parser};
use std::path::PathBuf;

/// migrun - preview migration SQL scripts in run order
///
/// Prints each configured script between a header and a separator. No
/// database connection is opened and no SQL is executed.
#[derive(Parser, Debug)]
#[command(name = "migrun")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every invocation
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output (written to stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Project directory script paths are resolved against
    #[arg(short = 'p', long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Override config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the directory holding the scripts
    #[arg(long)]
    pub scripts_dir: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
