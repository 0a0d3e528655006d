//! mr-core - Core library for migrun
//!
//! This crate holds the script list model, `migrun.yml` configuration
//! parsing, and the preview runner that prints migration SQL without
//! executing it.

pub mod config;
pub mod error;
pub mod runner;
pub mod script;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use runner::Runner;
pub use script::{default_scripts, ScriptEntry};
