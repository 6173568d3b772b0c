//! Wipe options

use crate::config::WipeConfig;
use crate::domain::policies::{WipeGuard, DEFAULT_WEBROOT};
use crate::domain::value_objects::RemotePath;

/// Options for the wipe command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WipeOptions {
    /// Root whose contents are deleted, exactly as configured
    pub webroot: String,
    /// Prefix the symlink fallback is confined to
    pub allowed_prefix: RemotePath,
}

impl WipeOptions {
    pub fn new(webroot: impl Into<String>) -> Self {
        Self {
            webroot: webroot.into(),
            allowed_prefix: RemotePath::new(DEFAULT_WEBROOT),
        }
    }

    /// Set the allow-listed prefix for the symlink fallback
    pub fn with_allowed_prefix(mut self, prefix: impl Into<RemotePath>) -> Self {
        self.allowed_prefix = prefix.into();
        self
    }

    pub fn guard(&self) -> WipeGuard {
        WipeGuard::new(self.allowed_prefix.clone())
    }
}

impl From<&WipeConfig> for WipeOptions {
    fn from(config: &WipeConfig) -> Self {
        Self::new(config.webroot.clone())
    }
}
