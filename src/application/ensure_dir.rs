//! Directory Ensurer
//!
//! Idempotently materializes a remote directory hierarchy, one level at a
//! time, tolerating another agent creating the same directory concurrently.

use std::sync::Arc;

use crate::domain::ports::{RemoteResult, RemoteSession, SyncEvent, SyncEventSink};
use crate::domain::value_objects::RemotePath;

/// Guarantees remote directories exist
pub struct DirectoryEnsurer<S>
where
    S: RemoteSession,
{
    session: S,
    events: Arc<dyn SyncEventSink>,
}

impl<S> DirectoryEnsurer<S>
where
    S: RemoteSession,
{
    pub fn new(session: S, events: Arc<dyn SyncEventSink>) -> Self {
        Self { session, events }
    }

    /// Make `path` a directory, creating missing ancestors in order
    ///
    /// On success a link-following stat of `path` reports a directory.
    /// A failed `make_dir` is re-checked before being reported: if the
    /// directory exists by then, someone else created it and that is fine.
    pub fn ensure(&self, path: &RemotePath) -> RemoteResult<()> {
        for prefix in path.ancestors_inclusive() {
            if self.session.is_dir(&prefix) {
                continue;
            }

            self.events.on_event(SyncEvent::DirectoryCreating {
                path: prefix.clone(),
            });
            if let Err(err) = self.session.make_dir(&prefix) {
                if !self.session.is_dir(&prefix) {
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}
