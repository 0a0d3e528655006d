//! Configuration types and parsing for migrun.yml

use crate::error::{CoreError, CoreResult};
use crate::script::{ScriptEntry, DEFAULT_SCRIPTS, DEFAULT_SCRIPTS_DIR};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file names probed by [`Config::load_from_dir`], in order
pub const CONFIG_FILE_NAMES: [&str; 2] = ["migrun.yml", "migrun.yaml"];

/// Project configuration from migrun.yml
///
/// Every field is optional; an absent file is equivalent to an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the SQL scripts, relative to the project root
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,

    /// Script file names, previewed in this order
    #[serde(default = "default_scripts")]
    pub scripts: Vec<String>,
}

fn default_scripts_dir() -> String {
    DEFAULT_SCRIPTS_DIR.to_string()
}

fn default_scripts() -> Vec<String> {
    DEFAULT_SCRIPTS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scripts_dir: default_scripts_dir(),
            scripts: default_scripts(),
        }
    }
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    ///
    /// Looks for migrun.yml or migrun.yaml and falls back to the built-in
    /// script list when neither exists.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        match Self::find_in_dir(dir) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("No config file in {}, using defaults", dir.display());
                Ok(Self::default())
            }
        }
    }

    /// Locate the config file inside `dir`, if any
    pub fn find_in_dir(dir: &Path) -> Option<std::path::PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        if self.scripts_dir.trim().is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "scripts_dir cannot be empty".to_string(),
            });
        }

        if self.scripts.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "scripts must list at least one file".to_string(),
            });
        }

        for name in &self.scripts {
            if name.trim().is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: "script names cannot be empty".to_string(),
                });
            }
            if Path::new(name).is_absolute() {
                return Err(CoreError::ConfigInvalid {
                    message: format!(
                        "script '{name}' must be relative to scripts_dir"
                    ),
                });
            }
        }

        Ok(())
    }

    /// Build the ordered script list
    pub fn script_entries(&self) -> Vec<ScriptEntry> {
        self.scripts
            .iter()
            .map(|name| ScriptEntry::in_dir(&self.scripts_dir, name))
            .collect()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
