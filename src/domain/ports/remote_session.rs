//! RemoteSession port - abstraction over a stateful remote filesystem session
//!
//! This trait allows the application layer to mirror and delete remote trees
//! without depending on the transport (SFTP over SSH, in-memory fake, ...).
//! Every call is synchronous and path-oriented.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::domain::value_objects::{NodeKind, RemotePath};

/// Result type for remote session operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// The remote primitive that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOp {
    Connect,
    Stat,
    Lstat,
    ReadLink,
    MakeDir,
    RemoveDir,
    RemoveFile,
    ListDir,
    Upload,
}

impl fmt::Display for RemoteOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RemoteOp::Connect => "connect",
            RemoteOp::Stat => "stat",
            RemoteOp::Lstat => "lstat",
            RemoteOp::ReadLink => "readlink",
            RemoteOp::MakeDir => "mkdir",
            RemoteOp::RemoveDir => "rmdir",
            RemoteOp::RemoveFile => "unlink",
            RemoteOp::ListDir => "listdir",
            RemoteOp::Upload => "upload",
        };
        f.write_str(name)
    }
}

/// Coarse classification of a remote failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    NotFound,
    PermissionDenied,
    Failure,
    /// The user pressed Ctrl-C; the session should be closed and the run ended
    Interrupted,
}

impl fmt::Display for RemoteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RemoteErrorKind::NotFound => "no such file",
            RemoteErrorKind::PermissionDenied => "permission denied",
            RemoteErrorKind::Failure => "failure",
            RemoteErrorKind::Interrupted => "interrupted",
        };
        f.write_str(label)
    }
}

/// Whether a caller may continue after a failure
///
/// Only a permission failure is recoverable, and only where a caller has a
/// fallback for it (unlinking a symlink). Everything else aborts the current
/// operation, and an interrupt always ends the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Fatal(RemoteErrorKind),
    Recoverable(RemoteErrorKind),
}

/// A failing remote primitive
#[derive(Debug, Clone, Error)]
#[error("{op} {path}: {kind}{}", detail_suffix(.message))]
pub struct RemoteError {
    pub op: RemoteOp,
    pub path: RemotePath,
    pub kind: RemoteErrorKind,
    pub message: String,
}

fn detail_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(" ({})", message)
    }
}

impl RemoteError {
    pub fn new(
        op: RemoteOp,
        path: impl Into<RemotePath>,
        kind: RemoteErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            op,
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn not_found(op: RemoteOp, path: impl Into<RemotePath>) -> Self {
        Self::new(op, path, RemoteErrorKind::NotFound, "")
    }

    pub fn permission_denied(op: RemoteOp, path: impl Into<RemotePath>) -> Self {
        Self::new(op, path, RemoteErrorKind::PermissionDenied, "")
    }

    pub fn failure(op: RemoteOp, path: impl Into<RemotePath>, message: impl Into<String>) -> Self {
        Self::new(op, path, RemoteErrorKind::Failure, message)
    }

    pub fn interrupted(op: RemoteOp, path: impl Into<RemotePath>) -> Self {
        Self::new(op, path, RemoteErrorKind::Interrupted, "")
    }

    pub fn is_interrupted(&self) -> bool {
        self.kind == RemoteErrorKind::Interrupted
    }

    pub fn disposition(&self) -> Disposition {
        match self.kind {
            RemoteErrorKind::PermissionDenied => Disposition::Recoverable(self.kind),
            kind => Disposition::Fatal(kind),
        }
    }
}

/// Path-oriented remote filesystem primitives
///
/// Implementations:
/// - `SftpSession` - SFTP subsystem over an authenticated SSH connection
/// - `FakeSession` - in-memory tree for tests
pub trait RemoteSession {
    /// Link-following stat. A missing path is `Ok(NodeKind::Missing)`.
    fn stat(&self, path: &RemotePath) -> RemoteResult<NodeKind>;

    /// Link-aware stat. A missing path is `Ok(NodeKind::Missing)`.
    fn lstat(&self, path: &RemotePath) -> RemoteResult<NodeKind>;

    /// Target of a symlink, as stored (may be relative)
    fn read_link(&self, path: &RemotePath) -> RemoteResult<String>;

    /// Create one directory; the parent must already exist
    fn make_dir(&self, path: &RemotePath) -> RemoteResult<()>;

    /// Remove an empty directory
    fn remove_dir(&self, path: &RemotePath) -> RemoteResult<()>;

    /// Remove a file or a symlink (never follows the link)
    fn remove_file(&self, path: &RemotePath) -> RemoteResult<()>;

    /// Entry names (not full paths) of a directory, without `.` and `..`
    fn list_dir(&self, path: &RemotePath) -> RemoteResult<Vec<String>>;

    /// Copy a local file to `remote`, overwriting unconditionally
    fn upload_file(&self, local: &Path, remote: &RemotePath) -> RemoteResult<()>;

    /// True when `path` currently resolves to a directory
    ///
    /// Any stat failure counts as "not a directory".
    fn is_dir(&self, path: &RemotePath) -> bool {
        matches!(self.stat(path), Ok(NodeKind::Directory))
    }
}

impl<S: RemoteSession + ?Sized> RemoteSession for &S {
    fn stat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        (**self).stat(path)
    }

    fn lstat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        (**self).lstat(path)
    }

    fn read_link(&self, path: &RemotePath) -> RemoteResult<String> {
        (**self).read_link(path)
    }

    fn make_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        (**self).make_dir(path)
    }

    fn remove_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        (**self).remove_dir(path)
    }

    fn remove_file(&self, path: &RemotePath) -> RemoteResult<()> {
        (**self).remove_file(path)
    }

    fn list_dir(&self, path: &RemotePath) -> RemoteResult<Vec<String>> {
        (**self).list_dir(path)
    }

    fn upload_file(&self, local: &Path, remote: &RemotePath) -> RemoteResult<()> {
        (**self).upload_file(local, remote)
    }
}
