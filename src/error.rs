//! Error types for webroot-sync
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::policies::GuardRailViolation;
use crate::domain::ports::RemoteError;
use crate::domain::value_objects::RemotePath;

/// Result type alias for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Main error type for deploy and wipe operations
#[derive(Error, Debug)]
pub enum SyncError {
    /// Missing or invalid configuration; raised before any remote call
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wipe target failed the safety checks; raised before any remote call
    #[error(transparent)]
    GuardRail(#[from] GuardRailViolation),

    /// A remote primitive failed
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Wipe root exists but is not a directory
    #[error("remote webroot is not a directory: {path}")]
    NotADirectory { path: RemotePath },

    /// Local tree could not be enumerated
    #[error("failed to walk local tree {}: {source}", root.display())]
    LocalWalk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },
}
