//! Script entries: the ordered SQL files a run previews

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory the default scripts live in, relative to the project root
pub const DEFAULT_SCRIPTS_DIR: &str = "scripts";

/// Built-in script list, in run order
pub const DEFAULT_SCRIPTS: [&str; 2] = ["001_create_courses_table.sql", "002_seed_courses.sql"];

/// A single SQL file scheduled for preview.
///
/// The path is kept exactly as configured so that every line the runner
/// prints names the script the same way the user wrote it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    path: String,
}

impl ScriptEntry {
    /// Create an entry from a path string
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Create an entry for `name` inside `dir`, joined with `/`
    pub fn in_dir(dir: &str, name: &str) -> Self {
        let dir = dir.trim_end_matches('/');
        if dir.is_empty() {
            return Self::new(name);
        }
        Self::new(format!("{dir}/{name}"))
    }

    /// The path as configured
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The on-disk location of this script under `root`
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }
}

impl fmt::Display for ScriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// The built-in ordered script list
pub fn default_scripts() -> Vec<ScriptEntry> {
    DEFAULT_SCRIPTS
        .iter()
        .map(|name| ScriptEntry::in_dir(DEFAULT_SCRIPTS_DIR, name))
        .collect()
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
