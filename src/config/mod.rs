//! Configuration module
//!
//! Configuration is read once, at the process boundary, from environment
//! variables and handed to the engine as plain structs. The engine itself
//! never reads ambient state.
//!
//! Empty variables are treated as unset.

mod loader;
mod types;

use std::path::PathBuf;

use thiserror::Error;

pub use loader::{env_lookup, EnvLookup};
pub use types::{
    DeployConfig, SessionConfig, WipeConfig, DEFAULT_LOCAL_DIST, DEFAULT_PORT, ENV_HOST,
    ENV_HOST_FINGERPRINT, ENV_LOCAL_DIST, ENV_PASSWORD, ENV_PORT, ENV_REMOTE_WEBROOT, ENV_USER,
    ENV_WIPE_WEBROOT,
};

/// Missing or invalid environment input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var: {name}")]
    MissingVar { name: &'static str },

    #[error("invalid {name} value '{value}': expected a port number between 1 and 65535")]
    InvalidPort { name: &'static str, value: String },

    #[error("local dist directory not found: {}", path.display())]
    LocalDistMissing { path: PathBuf },
}
