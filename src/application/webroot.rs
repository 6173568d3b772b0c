//! Webroot Resolver
//!
//! Discovers where deployed content should go: the `webroots` link at the
//! session root names the webroot; within it the deploy target is the first
//! existing directory among an explicit override, `<root>/www` and the root
//! itself.

use std::sync::Arc;

use crate::domain::policies::DEFAULT_WEBROOT;
use crate::domain::ports::{RemoteResult, RemoteSession, SyncEvent, SyncEventSink};
use crate::domain::value_objects::RemotePath;

use super::ensure_dir::DirectoryEnsurer;

/// Well-known link at the session root pointing at the webroot
pub const WEBROOTS_LINK: &str = "webroots";

/// Conventional content directory inside the webroot
pub const WWW_DIR: &str = "www";

/// Outcome of target selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWebroot {
    /// Webroot discovered via the link (or the default)
    pub root: RemotePath,
    /// Directory files will be uploaded into
    pub target: RemotePath,
    /// Whether `target` had to be created
    pub created: bool,
}

pub struct WebrootResolver<S>
where
    S: RemoteSession,
{
    session: S,
    events: Arc<dyn SyncEventSink>,
    default_root: RemotePath,
}

impl<S> WebrootResolver<S>
where
    S: RemoteSession,
{
    pub fn new(session: S, events: Arc<dyn SyncEventSink>) -> Self {
        Self {
            session,
            events,
            default_root: RemotePath::new(DEFAULT_WEBROOT),
        }
    }

    /// Override the root used when the `webroots` link is unusable
    pub fn with_default_root(mut self, root: impl Into<RemotePath>) -> Self {
        self.default_root = root.into();
        self
    }

    /// Read the `webroots` link; any failure degrades to the default root
    pub fn resolve_root(&self) -> RemotePath {
        let linked = self
            .session
            .read_link(&RemotePath::new(WEBROOTS_LINK))
            .ok()
            .filter(|target| !target.is_empty());

        let (root, via_link) = match linked {
            Some(target) => (RemotePath::new(target), true),
            None => (self.default_root.clone(), false),
        };
        self.events.on_event(SyncEvent::WebrootResolved {
            root: root.clone(),
            via_link,
        });
        root
    }

    /// Candidate targets in order of preference
    pub fn candidates(root: &RemotePath, override_path: Option<&RemotePath>) -> Vec<RemotePath> {
        override_path
            .cloned()
            .into_iter()
            .chain([root.join(WWW_DIR), root.clone()])
            .filter(|candidate| !candidate.is_empty())
            .collect()
    }

    /// Pick the first candidate that is currently a directory
    ///
    /// When none qualifies, `<root>/www` is created and used.
    pub fn select_target(
        &self,
        root: &RemotePath,
        override_path: Option<&RemotePath>,
    ) -> RemoteResult<ResolvedWebroot> {
        let existing = Self::candidates(root, override_path)
            .into_iter()
            .find(|candidate| self.session.is_dir(candidate));

        let (target, created) = match existing {
            Some(target) => (target, false),
            None => {
                let target = root.join(WWW_DIR);
                DirectoryEnsurer::new(&self.session, self.events.clone()).ensure(&target)?;
                (target, true)
            }
        };

        self.events.on_event(SyncEvent::TargetSelected {
            target: target.clone(),
            created,
        });
        Ok(ResolvedWebroot {
            root: root.clone(),
            target,
            created,
        })
    }

    /// Resolve the root, then select the deploy target within it
    pub fn resolve(&self, override_path: Option<&RemotePath>) -> RemoteResult<ResolvedWebroot> {
        let root = self.resolve_root();
        self.select_target(&root, override_path)
    }
}
