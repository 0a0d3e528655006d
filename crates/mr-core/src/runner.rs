//! Preview runner for migration scripts.
//!
//! Walks the script list once, in order, and prints each file's SQL between a
//! header and a separator. Nothing is executed against a database: the run is
//! a read-only preview of what would be applied.

use crate::error::CoreResult;
use crate::script::ScriptEntry;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Printed once before any script output
pub const START_BANNER: &str = "Running database migration scripts...";

/// Printed once after every script has been handled
pub const END_BANNER: &str = "Migration scripts completed!";

/// Label printed between a script header and its content
pub const CONTENT_LABEL: &str = "SQL Content:";

/// Width of the line printed after each script's content
pub const SEPARATOR_WIDTH: usize = 50;

/// The line printed after each script's content
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Previews scripts relative to a project root
#[derive(Debug, Clone)]
pub struct Runner {
    root: PathBuf,
}

impl Runner {
    /// Create a runner resolving script paths against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root scripts are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Preview every script in order, writing the transcript to `out`.
    ///
    /// Missing and unreadable scripts are reported inline and never stop the
    /// run. Only a failure to write to `out` is returned as an error.
    pub fn run<W: Write>(&self, scripts: &[ScriptEntry], out: &mut W) -> CoreResult<()> {
        writeln!(out, "{START_BANNER}")?;

        for script in scripts {
            let path = script.resolve(&self.root);
            if path.exists() {
                let previewed = self.preview_script(script, out)?;
                log::debug!(
                    "{}: {}",
                    script,
                    if previewed { "previewed" } else { "failed" }
                );
            } else {
                writeln!(out, "Script not found: {script}")?;
                log::debug!("{}: not found at {}", script, path.display());
            }
        }

        writeln!(out, "{END_BANNER}")?;
        out.flush()?;
        Ok(())
    }

    /// Read one script and print its preview.
    ///
    /// Returns `Ok(true)` when the content was printed and `Ok(false)` when
    /// the file could not be opened or read as UTF-8 text; the read error is
    /// printed, not returned.
    pub fn preview_script<W: Write>(&self, script: &ScriptEntry, out: &mut W) -> CoreResult<bool> {
        let path = script.resolve(&self.root);
        let sql = match fs::read_to_string(&path) {
            Ok(sql) => sql,
            Err(e) => {
                log::warn!("Cannot read {}: {}", path.display(), e);
                writeln!(out, "Error executing {script}: {e}")?;
                return Ok(false);
            }
        };

        writeln!(out, "Executing {script}...")?;
        writeln!(out, "{CONTENT_LABEL}")?;
        writeln!(out, "{sql}")?;
        writeln!(out, "{}", separator())?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
