//! Tree Uploader
//!
//! Mirrors every entry of a local directory onto a remote directory. Every
//! file is uploaded on every run; there is no diffing.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use serde::Serialize;

use crate::domain::ports::{RemoteSession, SyncEvent, SyncEventSink};
use crate::domain::value_objects::RemotePath;
use crate::error::{SyncError, SyncResult};

use super::ensure_dir::DirectoryEnsurer;

/// Kind of a local entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalKind {
    File,
    Directory,
}

/// One entry of the local snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEntry {
    /// Absolute (or root-relative as given) local path
    pub path: PathBuf,
    /// Path segments relative to the local root
    pub relative: Vec<String>,
    pub kind: LocalKind,
}

/// Counts from one upload run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    /// Files transferred
    pub files: usize,
    /// Local directories mirrored (not part of the transfer count)
    pub directories: usize,
}

/// Snapshot every entry under `root`, parents before children
///
/// Nothing is filtered: hidden files and ignore files are uploaded like
/// anything else. Symlinks are not descended into; a link to a directory is
/// mirrored as an (empty) directory and a link to a file is uploaded as the
/// file's content.
pub fn snapshot_local_tree(root: &Path) -> SyncResult<Vec<LocalEntry>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut entries = Vec::new();
    for result in walker {
        let entry = result.map_err(|source| SyncError::LocalWalk {
            root: root.to_path_buf(),
            source,
        })?;
        if entry.depth() == 0 {
            continue;
        }

        let path = entry.path().to_path_buf();
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path.as_path())
            .components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .collect();
        let kind = if path.is_dir() {
            LocalKind::Directory
        } else {
            LocalKind::File
        };

        entries.push(LocalEntry {
            path,
            relative,
            kind,
        });
    }
    Ok(entries)
}

pub struct TreeUploader<S>
where
    S: RemoteSession,
{
    session: S,
    events: Arc<dyn SyncEventSink>,
}

impl<S> TreeUploader<S>
where
    S: RemoteSession,
{
    pub fn new(session: S, events: Arc<dyn SyncEventSink>) -> Self {
        Self { session, events }
    }

    /// Upload the whole of `local_root` into `remote_root`
    ///
    /// The caller guarantees `local_root` is an existing directory. The first
    /// failure aborts the run; files uploaded before it stay in place.
    pub fn upload_tree(&self, local_root: &Path, remote_root: &RemotePath) -> SyncResult<UploadResult> {
        let ensurer = DirectoryEnsurer::new(&self.session, self.events.clone());
        ensurer.ensure(remote_root)?;

        let mut result = UploadResult::default();
        for entry in snapshot_local_tree(local_root)? {
            let remote = remote_root.join_segments(&entry.relative);
            match entry.kind {
                LocalKind::Directory => {
                    ensurer.ensure(&remote)?;
                    result.directories += 1;
                }
                LocalKind::File => {
                    if let Some(parent) = remote.parent() {
                        ensurer.ensure(&parent)?;
                    }
                    self.events.on_event(SyncEvent::FileUploading {
                        local: entry.path.clone(),
                        remote: remote.clone(),
                    });
                    self.session.upload_file(&entry.path, &remote)?;
                    result.files += 1;
                }
            }
        }

        self.events.on_event(SyncEvent::UploadCompleted {
            files: result.files,
        });
        Ok(result)
    }
}
