//! migrun CLI - previews migration SQL scripts without executing them

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::preview;

fn main() -> Result<()> {
    let cli = Cli::parse();
    preview::execute(&cli.global)
}
