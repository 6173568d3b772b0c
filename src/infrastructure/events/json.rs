//! JSON Event Sink
//!
//! Outputs sync events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SyncEvent, SyncEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// `"deploy"` or `"wipe"`, stamped on every event
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl SyncEventSink for JsonEventSink {
    fn on_event(&self, event: SyncEvent) {
        let command = self.command;
        let json = match event {
            SyncEvent::WebrootResolved { root, via_link } => serde_json::json!({
                "event": "webroot_resolved",
                "command": command,
                "root": root.as_str(),
                "via_link": via_link,
            }),

            SyncEvent::TargetSelected { target, created } => serde_json::json!({
                "event": "target_selected",
                "command": command,
                "target": target.as_str(),
                "created": created,
            }),

            SyncEvent::DirectoryCreating { path } => serde_json::json!({
                "event": "mkdir",
                "command": command,
                "path": path.as_str(),
            }),

            SyncEvent::FileUploading { local, remote } => serde_json::json!({
                "event": "put",
                "command": command,
                "local": local.display().to_string(),
                "remote": remote.as_str(),
            }),

            SyncEvent::UploadCompleted { files } => serde_json::json!({
                "event": "upload_complete",
                "command": command,
                "files": files,
            }),

            SyncEvent::ListFailed { path, error } => serde_json::json!({
                "event": "list_failed",
                "command": command,
                "path": path.as_str(),
                "error": error,
            }),

            SyncEvent::SkippedMissing { path, reason } => serde_json::json!({
                "event": "skip_missing",
                "command": command,
                "path": path.as_str(),
                "reason": reason,
            }),

            SyncEvent::SymlinkFound { path } => serde_json::json!({
                "event": "symlink",
                "command": command,
                "path": path.as_str(),
            }),

            SyncEvent::SymlinkUnlinking { path } => serde_json::json!({
                "event": "unlink_symlink",
                "command": command,
                "path": path.as_str(),
            }),

            SyncEvent::SymlinkFallback {
                path,
                target,
                error,
            } => serde_json::json!({
                "event": "symlink_fallback",
                "command": command,
                "path": path.as_str(),
                "target": target,
                "error": error,
            }),

            SyncEvent::SymlinkTargetOutsideAllowList { target, allowed } => serde_json::json!({
                "event": "symlink_target_outside_allow_list",
                "command": command,
                "target": target.as_str(),
                "allowed": allowed.as_str(),
            }),

            SyncEvent::SymlinkTargetFileRemoveFailed { target, error } => serde_json::json!({
                "event": "symlink_target_remove_failed",
                "command": command,
                "target": target.as_str(),
                "error": error,
            }),

            SyncEvent::SymlinkHandlingFailed { path, error } => serde_json::json!({
                "event": "symlink_failed",
                "command": command,
                "path": path.as_str(),
                "error": error,
            }),

            SyncEvent::DirectoryRemoving { path } => serde_json::json!({
                "event": "rmdir",
                "command": command,
                "path": path.as_str(),
            }),

            SyncEvent::FileRemoving { path } => serde_json::json!({
                "event": "unlink_file",
                "command": command,
                "path": path.as_str(),
            }),
        };

        self.write_event(json);
    }
}
