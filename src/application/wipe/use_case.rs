//! Wipe Use Case
//!
//! Orchestrates the guarded deletion of a webroot's contents.

use std::sync::Arc;

use crate::application::delete::SafeRecursiveDeleter;
use crate::domain::ports::{RemoteSession, SyncEventSink};
use crate::error::{SyncError, SyncResult};

use super::options::WipeOptions;
use super::result::WipeResult;

/// Wipe use case - empties a remote directory
pub struct WipeUseCase<S>
where
    S: RemoteSession,
{
    session: S,
    events: Arc<dyn SyncEventSink>,
}

impl<S> WipeUseCase<S>
where
    S: RemoteSession,
{
    pub fn new(session: S, events: Arc<dyn SyncEventSink>) -> Self {
        Self { session, events }
    }

    /// Execute the wipe
    ///
    /// Guard rails are evaluated before the session is touched.
    pub fn execute(&self, options: &WipeOptions) -> SyncResult<WipeResult> {
        let guard = options.guard();
        let root = guard.check_root(&options.webroot)?;

        if !self.session.is_dir(&root) {
            return Err(SyncError::NotADirectory { path: root });
        }

        let summary = SafeRecursiveDeleter::new(&self.session, self.events.clone(), guard)
            .delete_contents_of(&options.webroot)?;

        Ok(WipeResult { root, summary })
    }
}
