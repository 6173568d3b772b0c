//! webroot-sync - mirror a local build onto an SFTP webroot
//!
//! Two operations over one SFTP session:
//! - deploy: resolve the webroot (via the `webroots` link), create missing
//!   directories, upload every local file
//! - wipe: guarded, symlink-safe recursive deletion of a webroot's contents

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use config::{DeployConfig, SessionConfig, WipeConfig};
pub use domain::ports::{RemoteError, RemoteSession, SyncEvent, SyncEventSink};
pub use domain::value_objects::{NodeKind, RemotePath};
pub use error::{SyncError, SyncResult};
