//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Resolve the webroot and pick the target directory
//! 2. Upload the local tree into it
//! 3. List what the target now contains
//!
//! Pure orchestration: the algorithms live in the resolver and uploader.

use std::sync::Arc;

use crate::application::upload::TreeUploader;
use crate::application::webroot::WebrootResolver;
use crate::domain::ports::{RemoteResult, RemoteSession, SyncEvent, SyncEventSink};
use crate::domain::value_objects::RemotePath;
use crate::error::SyncResult;

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case, parameterized by the remote session port
pub struct DeployUseCase<S>
where
    S: RemoteSession,
{
    session: S,
    events: Arc<dyn SyncEventSink>,
}

impl<S> DeployUseCase<S>
where
    S: RemoteSession,
{
    pub fn new(session: S, events: Arc<dyn SyncEventSink>) -> Self {
        Self { session, events }
    }

    /// Execute the deploy
    ///
    /// Stops at the first remote failure. A failure to list the target
    /// afterwards, other than an interrupt, is reported as an event and
    /// leaves `listing` empty.
    pub fn execute(&self, options: &DeployOptions) -> SyncResult<DeployResult> {
        let resolved = WebrootResolver::new(&self.session, self.events.clone())
            .with_default_root(options.default_root.clone())
            .resolve(options.remote_webroot.as_ref())?;

        let uploaded = TreeUploader::new(&self.session, self.events.clone())
            .upload_tree(&options.local_dist, &resolved.target)?;

        let listing = self.list_sorted(&resolved.target)?;

        Ok(DeployResult {
            root: resolved.root,
            target: resolved.target,
            created: resolved.created,
            uploaded,
            listing,
        })
    }

    fn list_sorted(&self, target: &RemotePath) -> RemoteResult<Option<Vec<String>>> {
        match self.session.list_dir(target) {
            Ok(mut names) => {
                names.sort();
                Ok(Some(names))
            }
            Err(err) if err.is_interrupted() => Err(err),
            Err(err) => {
                self.events.on_event(SyncEvent::ListFailed {
                    path: target.clone(),
                    error: err.to_string(),
                });
                Ok(None)
            }
        }
    }
}
