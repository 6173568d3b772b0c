//! Console Event Sink
//!
//! One line per event. Filesystem actions carry a tag, e.g.
//! `[mkdir] /run/webroots/www`.
//! Warnings go to stderr (yellow when color is on); everything else to stdout.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{SyncEvent, SyncEventSink};

/// Render the console line for an event
pub fn format_event(event: &SyncEvent) -> String {
    match event {
        SyncEvent::WebrootResolved { root, .. } => format!("Remote root: {}", root),
        SyncEvent::TargetSelected { target, created } => {
            if *created {
                format!("Deploy to: {} (created)", target)
            } else {
                format!("Deploy to: {}", target)
            }
        }
        SyncEvent::UploadCompleted { files } => format!("Uploaded {} files.", files),
        SyncEvent::DirectoryCreating { path } => format!("[mkdir] {}", path),
        SyncEvent::FileUploading { local, remote } => {
            format!("[put] {} -> {}", local.display(), remote)
        }
        SyncEvent::ListFailed { path, error } => {
            format!("[warn] could not list {}: {}", path, error)
        }
        SyncEvent::SkippedMissing { path, reason } => {
            format!("[skip] missing {} ({})", path, reason)
        }
        SyncEvent::SymlinkFound { path } => format!("[symlink] {}", path),
        SyncEvent::SymlinkUnlinking { path } => format!("[unlink symlink] {}", path),
        SyncEvent::SymlinkFallback {
            path,
            target,
            error,
        } => format!(
            "[warn] cannot unlink symlink {} ({}); wiping contents of its target {}",
            path, error, target
        ),
        SyncEvent::SymlinkTargetOutsideAllowList { target, allowed } => format!(
            "[warn] symlink target {} is outside {}; left untouched",
            target, allowed
        ),
        SyncEvent::SymlinkTargetFileRemoveFailed { target, error } => {
            format!("[warn] could not remove symlink target {}: {}", target, error)
        }
        SyncEvent::SymlinkHandlingFailed { path, error } => {
            format!("[skip] cannot handle symlink {}: {}", path, error)
        }
        SyncEvent::DirectoryRemoving { path } => format!("[rmdir] {}", path),
        SyncEvent::FileRemoving { path } => format!("[unlink file] {}", path),
    }
}

/// Human-readable progress sink
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    color: bool,
}

impl ConsoleEventSink {
    /// Sink writing to the process stdout and stderr
    pub fn stdio(color: bool) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), color)
    }

    pub fn with_writers<O, E>(out: O, err: E, color: bool) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            color,
        }
    }

    fn write_line(writer: &Mutex<Box<dyn Write + Send>>, line: &str) {
        if let Ok(mut writer) = writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl SyncEventSink for ConsoleEventSink {
    fn on_event(&self, event: SyncEvent) {
        let line = format_event(&event);

        if event.is_warning() {
            let line = if self.color {
                line.yellow().to_string()
            } else {
                line
            };
            Self::write_line(&self.err, &line);
        } else {
            Self::write_line(&self.out, &line);
        }
    }
}
