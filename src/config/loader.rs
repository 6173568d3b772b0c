//! Configuration loading from environment variables

use std::fs;
use std::path::PathBuf;

use crate::domain::value_objects::RemotePath;

use super::types::*;
use super::ConfigError;

/// Source of environment-style key/value settings
///
/// Implemented for closures so tests never touch the process environment.
pub trait EnvLookup {
    fn get(&self, name: &str) -> Option<String>;

    /// Value of `name`, with empty strings treated as unset
    fn non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }

    fn required(&self, name: &'static str) -> Result<String, ConfigError> {
        self.non_empty(name)
            .ok_or(ConfigError::MissingVar { name })
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Lookup backed by the process environment
pub fn env_lookup() -> impl EnvLookup {
    |name: &str| std::env::var(name).ok()
}

fn parse_port(env: &impl EnvLookup) -> Result<u16, ConfigError> {
    match env.non_empty(ENV_PORT) {
        None => Ok(DEFAULT_PORT),
        Some(raw) => match raw.trim().parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConfigError::InvalidPort {
                name: ENV_PORT,
                value: raw,
            }),
        },
    }
}

impl SessionConfig {
    /// Read `SFTP_HOST`, `SFTP_USER`, `SFTP_PASSWORD` (required), `SFTP_PORT`
    /// and `SFTP_HOST_FINGERPRINT` (optional)
    pub fn from_lookup(env: &impl EnvLookup) -> Result<Self, ConfigError> {
        Ok(Self {
            host: env.required(ENV_HOST)?,
            username: env.required(ENV_USER)?,
            password: env.required(ENV_PASSWORD)?,
            port: parse_port(env)?,
            host_fingerprint: env.non_empty(ENV_HOST_FINGERPRINT),
        })
    }
}

impl DeployConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup())
    }

    /// Build deploy settings; the local dist directory must already exist
    pub fn from_lookup(env: &impl EnvLookup) -> Result<Self, ConfigError> {
        let session = SessionConfig::from_lookup(env)?;

        let local_dist = PathBuf::from(
            env.non_empty(ENV_LOCAL_DIST)
                .unwrap_or_else(|| DEFAULT_LOCAL_DIST.to_string()),
        );
        if !local_dist.is_dir() {
            return Err(ConfigError::LocalDistMissing { path: local_dist });
        }
        let local_dist = fs::canonicalize(&local_dist)
            .map_err(|_| ConfigError::LocalDistMissing { path: local_dist })?;

        Ok(Self {
            session,
            local_dist,
            remote_webroot: env.non_empty(ENV_REMOTE_WEBROOT).map(RemotePath::new),
        })
    }
}

impl WipeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup())
    }

    pub fn from_lookup(env: &impl EnvLookup) -> Result<Self, ConfigError> {
        let session = SessionConfig::from_lookup(env)?;
        let webroot = env
            .non_empty(ENV_WIPE_WEBROOT)
            .unwrap_or_else(|| Self::default_webroot().to_string());
        Ok(Self { session, webroot })
    }
}
