//! Preview command implementation

use anyhow::{Context, Result};
use mr_core::{Config, Runner};
use std::io::{self, Write};

use crate::cli::GlobalArgs;

/// Execute the preview, writing the transcript to stdout
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_to(global, &mut out)
}

/// Execute the preview against an arbitrary writer
pub(crate) fn execute_to<W: Write>(global: &GlobalArgs, out: &mut W) -> Result<()> {
    let config = load_config(global)?;
    let scripts = config.script_entries();
    let runner = Runner::new(&global.project_dir);

    verbose(
        global,
        &format!("Project directory: {}", runner.root().display()),
    );
    verbose(
        global,
        &format!(
            "Previewing {} script{} from '{}'",
            scripts.len(),
            if scripts.len() == 1 { "" } else { "s" },
            config.scripts_dir
        ),
    );

    runner
        .run(&scripts, out)
        .context("Failed to write preview output")?;

    Ok(())
}

/// Resolve configuration from `--config`, the project directory, and
/// `--scripts-dir`, in that order of precedence for the scripts directory.
fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => {
            verbose(global, &format!("Config: {}", path.display()));
            Config::load(path).context("Failed to load configuration file")?
        }
        None => {
            match Config::find_in_dir(&global.project_dir) {
                Some(path) => verbose(global, &format!("Config: {}", path.display())),
                None => verbose(global, "Config: built-in defaults"),
            }
            Config::load_from_dir(&global.project_dir)
                .context("Failed to load project configuration")?
        }
    };

    if let Some(dir) = &global.scripts_dir {
        config.scripts_dir = dir.clone();
        config.validate().context("Invalid --scripts-dir")?;
    }

    Ok(config)
}

/// Print verbose output if enabled
fn verbose(global: &GlobalArgs, msg: &str) {
    if global.verbose {
        eprintln!("[verbose] {}", msg);
    }
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
