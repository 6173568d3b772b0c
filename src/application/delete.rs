//! Safe Recursive Deleter
//!
//! Deletes the contents of a remote directory bottom-up.
//!
//! Rules, driven by a link-aware stat of each visited path:
//! - missing: skipped
//! - symlink: the link itself is unlinked and never traversed. Only when the
//!   server refuses the unlink with a permission error, the link target's
//!   *contents* are wiped instead, provided the target lies under the
//!   allow-listed prefix. The link and the target directory both stay.
//! - directory: children first, then the now-empty directory
//! - file: unlinked
//!
//! Listing failures degrade to "no children"; any other failure aborts.
//! An interrupt is never tolerated, whichever primitive reports it.

use std::cell::RefCell;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::policies::WipeGuard;
use crate::domain::ports::{
    Disposition, RemoteError, RemoteResult, RemoteSession, SyncEvent, SyncEventSink,
};
use crate::domain::value_objects::{NodeKind, RemotePath};
use crate::error::SyncResult;

/// What a wipe removed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WipeSummary {
    pub files: usize,
    pub directories: usize,
    pub symlinks: usize,
    pub warnings: usize,
}

pub struct SafeRecursiveDeleter<S>
where
    S: RemoteSession,
{
    session: S,
    events: Arc<dyn SyncEventSink>,
    guard: WipeGuard,
    /// Link targets whose contents are being wiped on the current path
    fallback_targets: RefCell<Vec<RemotePath>>,
}

impl<S> SafeRecursiveDeleter<S>
where
    S: RemoteSession,
{
    pub fn new(session: S, events: Arc<dyn SyncEventSink>, guard: WipeGuard) -> Self {
        Self {
            session,
            events,
            guard,
            fallback_targets: RefCell::new(Vec::new()),
        }
    }

    /// Delete every child of `root`, keeping `root` itself
    ///
    /// Guard rails run first; a rejected root issues no remote call at all.
    pub fn delete_contents_of(&self, root: &str) -> SyncResult<WipeSummary> {
        let root = self.guard.check_root(root)?;

        let mut summary = WipeSummary::default();
        self.remove_children(&root, &mut summary)?;
        Ok(summary)
    }

    fn emit(&self, event: SyncEvent, summary: &mut WipeSummary) {
        if event.is_warning() {
            summary.warnings += 1;
        }
        self.events.on_event(event);
    }

    /// Children of a directory, or none if it cannot be listed
    fn list_children(
        &self,
        dir: &RemotePath,
        summary: &mut WipeSummary,
    ) -> RemoteResult<Vec<String>> {
        match self.session.list_dir(dir) {
            Ok(names) => Ok(names),
            Err(err) if err.is_interrupted() => Err(err),
            Err(err) => {
                self.emit(
                    SyncEvent::ListFailed {
                        path: dir.clone(),
                        error: err.to_string(),
                    },
                    summary,
                );
                Ok(Vec::new())
            }
        }
    }

    fn remove_children(&self, dir: &RemotePath, summary: &mut WipeSummary) -> RemoteResult<()> {
        for name in self.list_children(dir, summary)? {
            self.remove_tree(&dir.join(&name), summary)?;
        }
        Ok(())
    }

    fn remove_tree(&self, path: &RemotePath, summary: &mut WipeSummary) -> RemoteResult<()> {
        let kind = match self.session.lstat(path) {
            Ok(NodeKind::Missing) => {
                self.emit(
                    SyncEvent::SkippedMissing {
                        path: path.clone(),
                        reason: "no such file".to_string(),
                    },
                    summary,
                );
                return Ok(());
            }
            Err(err) if err.is_interrupted() => return Err(err),
            Err(err) => {
                self.emit(
                    SyncEvent::SkippedMissing {
                        path: path.clone(),
                        reason: err.to_string(),
                    },
                    summary,
                );
                return Ok(());
            }
            Ok(kind) => kind,
        };

        match kind {
            NodeKind::Symlink => self.remove_symlink(path, summary),
            NodeKind::Directory => {
                self.remove_children(path, summary)?;
                self.emit(SyncEvent::DirectoryRemoving { path: path.clone() }, summary);
                self.session.remove_dir(path)?;
                summary.directories += 1;
                Ok(())
            }
            NodeKind::File | NodeKind::Missing => {
                self.emit(SyncEvent::FileRemoving { path: path.clone() }, summary);
                self.session.remove_file(path)?;
                summary.files += 1;
                Ok(())
            }
        }
    }

    fn remove_symlink(&self, link: &RemotePath, summary: &mut WipeSummary) -> RemoteResult<()> {
        self.emit(SyncEvent::SymlinkFound { path: link.clone() }, summary);
        self.emit(SyncEvent::SymlinkUnlinking { path: link.clone() }, summary);

        let err = match self.session.remove_file(link) {
            Ok(()) => {
                summary.symlinks += 1;
                return Ok(());
            }
            Err(err) => err,
        };

        match err.disposition() {
            Disposition::Fatal(_) => Err(err),
            Disposition::Recoverable(_) => {
                if let Err(fallback) = self.wipe_link_target(link, &err, summary) {
                    if fallback.is_interrupted() {
                        return Err(fallback);
                    }
                    self.emit(
                        SyncEvent::SymlinkHandlingFailed {
                            path: link.clone(),
                            error: fallback.to_string(),
                        },
                        summary,
                    );
                }
                Ok(())
            }
        }
    }

    /// Wipe what a non-removable link points at, never the link or target node
    fn wipe_link_target(
        &self,
        link: &RemotePath,
        unlink_error: &RemoteError,
        summary: &mut WipeSummary,
    ) -> RemoteResult<()> {
        let raw = self.session.read_link(link)?;
        self.emit(
            SyncEvent::SymlinkFallback {
                path: link.clone(),
                target: raw.clone(),
                error: unlink_error.to_string(),
            },
            summary,
        );

        let target = resolve_link_target(link, &raw);
        if !self.guard.allows_target(&target) {
            self.emit(
                SyncEvent::SymlinkTargetOutsideAllowList {
                    target,
                    allowed: self.guard.allowed_prefix().clone(),
                },
                summary,
            );
            return Ok(());
        }

        // A target containing the link, or one already being wiped further
        // up, would lead straight back here
        if link.lexically_normalized().starts_with(&target)
            || self.fallback_targets.borrow().contains(&target)
        {
            self.emit(
                SyncEvent::SymlinkHandlingFailed {
                    path: link.clone(),
                    error: format!("target {} would loop back to the link", target),
                },
                summary,
            );
            return Ok(());
        }

        match self.session.lstat(&target)? {
            NodeKind::Directory => {
                self.fallback_targets.borrow_mut().push(target.clone());
                let wiped = self.remove_children(&target, summary);
                self.fallback_targets.borrow_mut().pop();
                wiped?;
            }
            NodeKind::Missing => {
                self.emit(
                    SyncEvent::SkippedMissing {
                        path: target,
                        reason: "dangling symlink".to_string(),
                    },
                    summary,
                );
            }
            NodeKind::File | NodeKind::Symlink => {
                self.emit(SyncEvent::FileRemoving { path: target.clone() }, summary);
                match self.session.remove_file(&target) {
                    Ok(()) => summary.files += 1,
                    Err(err) if err.is_interrupted() => return Err(err),
                    Err(err) => self.emit(
                        SyncEvent::SymlinkTargetFileRemoveFailed {
                            target,
                            error: err.to_string(),
                        },
                        summary,
                    ),
                }
            }
        }
        Ok(())
    }
}

/// Absolute, normalized location a link points at
///
/// Relative targets are interpreted against the link's parent directory.
pub fn resolve_link_target(link: &RemotePath, raw_target: &str) -> RemotePath {
    let base = link.parent().unwrap_or_else(RemotePath::root);
    base.join(raw_target).lexically_normalized()
}
