//! Deploy Options

use std::path::PathBuf;

use crate::config::DeployConfig;
use crate::domain::policies::DEFAULT_WEBROOT;
use crate::domain::value_objects::RemotePath;

/// Options for the deploy use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Local directory whose contents are uploaded
    pub local_dist: PathBuf,
    /// Explicit target, preferred over every discovered candidate
    pub remote_webroot: Option<RemotePath>,
    /// Root used when the `webroots` link cannot be read
    pub default_root: RemotePath,
}

impl DeployOptions {
    pub fn new(local_dist: impl Into<PathBuf>) -> Self {
        Self {
            local_dist: local_dist.into(),
            remote_webroot: None,
            default_root: RemotePath::new(DEFAULT_WEBROOT),
        }
    }

    pub fn with_remote_webroot(mut self, webroot: Option<RemotePath>) -> Self {
        self.remote_webroot = webroot;
        self
    }

    pub fn with_default_root(mut self, root: impl Into<RemotePath>) -> Self {
        self.default_root = root.into();
        self
    }
}

impl From<&DeployConfig> for DeployOptions {
    fn from(config: &DeployConfig) -> Self {
        Self::new(config.local_dist.clone()).with_remote_webroot(config.remote_webroot.clone())
    }
}
