//! CLI command implementations

pub(crate) mod preview;
