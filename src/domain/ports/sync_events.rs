//! Sync Event Port
//!
//! Provides an observable interface for deploy and wipe operations.
//! Every remote action is announced here before it is performed, so a sink
//! can stream progress line by line.

use std::path::PathBuf;

use crate::domain::value_objects::RemotePath;

/// Event emitted during deploy and wipe operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// Webroot discovered (via the `webroots` link, or the fixed default)
    WebrootResolved { root: RemotePath, via_link: bool },

    /// Deploy target chosen from the candidate chain
    TargetSelected { target: RemotePath, created: bool },

    /// A missing remote directory is about to be created
    DirectoryCreating { path: RemotePath },

    /// A local file is about to be uploaded
    FileUploading { local: PathBuf, remote: RemotePath },

    /// Whole tree uploaded
    UploadCompleted { files: usize },

    /// A directory could not be listed; it is treated as empty
    ListFailed { path: RemotePath, error: String },

    /// Nothing to delete at this path
    SkippedMissing { path: RemotePath, reason: String },

    /// A symlink was found while wiping
    SymlinkFound { path: RemotePath },

    /// The symlink itself is about to be unlinked
    SymlinkUnlinking { path: RemotePath },

    /// Unlinking was refused; the link target's contents will be wiped instead
    SymlinkFallback {
        path: RemotePath,
        target: String,
        error: String,
    },

    /// Resolved link target lies outside the allow-listed prefix
    SymlinkTargetOutsideAllowList {
        target: RemotePath,
        allowed: RemotePath,
    },

    /// Link target was a file and could not be removed
    SymlinkTargetFileRemoveFailed { target: RemotePath, error: String },

    /// The permission fallback itself failed
    SymlinkHandlingFailed { path: RemotePath, error: String },

    /// An empty directory is about to be removed
    DirectoryRemoving { path: RemotePath },

    /// A file is about to be unlinked
    FileRemoving { path: RemotePath },
}

impl SyncEvent {
    /// Events a human should notice even when skimming output
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            SyncEvent::ListFailed { .. }
                | SyncEvent::SymlinkFallback { .. }
                | SyncEvent::SymlinkTargetOutsideAllowList { .. }
                | SyncEvent::SymlinkTargetFileRemoveFailed { .. }
                | SyncEvent::SymlinkHandlingFailed { .. }
        )
    }
}

/// Trait for receiving sync events
///
/// Implementations:
/// - ConsoleEventSink: one tagged line per event
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait SyncEventSink: Send + Sync {
    /// Handle a sync event
    fn on_event(&self, event: SyncEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SyncEventSink for NoopEventSink {
    fn on_event(&self, _event: SyncEvent) {}
}
