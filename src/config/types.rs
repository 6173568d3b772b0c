//! Configuration types

use std::fmt;
use std::path::PathBuf;

use crate::domain::policies::DEFAULT_WEBROOT;
use crate::domain::value_objects::RemotePath;

pub const ENV_HOST: &str = "SFTP_HOST";
pub const ENV_USER: &str = "SFTP_USER";
pub const ENV_PASSWORD: &str = "SFTP_PASSWORD";
pub const ENV_PORT: &str = "SFTP_PORT";
pub const ENV_HOST_FINGERPRINT: &str = "SFTP_HOST_FINGERPRINT";
pub const ENV_LOCAL_DIST: &str = "LOCAL_DIST";
pub const ENV_REMOTE_WEBROOT: &str = "REMOTE_WEBROOT";
pub const ENV_WIPE_WEBROOT: &str = "SFTP_WEBROOT";

pub const DEFAULT_PORT: u16 = 22;
pub const DEFAULT_LOCAL_DIST: &str = "oniu-web/dist";

/// Connection parameters for one SFTP session
#[derive(Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Expected `SHA256:...` host key fingerprint; any key is accepted when unset
    pub host_fingerprint: Option<String>,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host_fingerprint", &self.host_fingerprint)
            .finish()
    }
}

/// Inputs of the deploy command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub session: SessionConfig,
    /// Absolute path of an existing local directory
    pub local_dist: PathBuf,
    /// Explicit target that wins over every discovered candidate
    pub remote_webroot: Option<RemotePath>,
}

/// Inputs of the wipe command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WipeConfig {
    pub session: SessionConfig,
    /// Raw root as configured; guard rails run on this exact string
    pub webroot: String,
}

impl WipeConfig {
    pub fn default_webroot() -> &'static str {
        DEFAULT_WEBROOT
    }
}
