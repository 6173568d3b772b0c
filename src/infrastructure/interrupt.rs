//! Ctrl-C coordination
//!
//! With no session open, an interrupt ends the process straight away. While a
//! session is open it only raises a flag: the next remote primitive then fails
//! with `RemoteErrorKind::Interrupted`, the command closes the session, and
//! the binary exits with 130. A second Ctrl-C exits immediately.

use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::domain::ports::{RemoteError, RemoteOp, RemoteResult, RemoteSession};
use crate::domain::value_objects::{NodeKind, RemotePath};

#[derive(Debug, Default)]
struct State {
    requested: AtomicBool,
    open_sessions: AtomicUsize,
}

/// Shared interrupt flag, cheap to clone into the signal handler
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    state: Arc<State>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a Ctrl-C
    ///
    /// Returns `true` when the caller should exit at once: nothing needs
    /// closing, or this is the second request.
    pub fn request(&self) -> bool {
        let repeated = self.state.requested.swap(true, Ordering::SeqCst);
        repeated || self.state.open_sessions.load(Ordering::SeqCst) == 0
    }

    pub fn is_requested(&self) -> bool {
        self.state.requested.load(Ordering::SeqCst)
    }

    /// Mark a session as open until the returned guard is dropped
    pub fn session_open(&self) -> OpenSession {
        self.state.open_sessions.fetch_add(1, Ordering::SeqCst);
        OpenSession {
            state: self.state.clone(),
        }
    }
}

/// Keeps an interrupt from exiting the process while a session is open
#[must_use = "the session counts as open only while the guard lives"]
pub struct OpenSession {
    state: Arc<State>,
}

impl Drop for OpenSession {
    fn drop(&mut self) {
        self.state.open_sessions.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Session decorator that refuses every primitive once Ctrl-C was pressed
pub struct InterruptibleSession<S> {
    inner: S,
    interrupt: Interrupt,
}

impl<S> InterruptibleSession<S>
where
    S: RemoteSession,
{
    pub fn new(inner: S, interrupt: Interrupt) -> Self {
        Self { inner, interrupt }
    }

    fn check(&self, op: RemoteOp, path: &RemotePath) -> RemoteResult<()> {
        if self.interrupt.is_requested() {
            Err(RemoteError::interrupted(op, path.clone()))
        } else {
            Ok(())
        }
    }
}

impl<S> RemoteSession for InterruptibleSession<S>
where
    S: RemoteSession,
{
    fn stat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        self.check(RemoteOp::Stat, path)?;
        self.inner.stat(path)
    }

    fn lstat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        self.check(RemoteOp::Lstat, path)?;
        self.inner.lstat(path)
    }

    fn read_link(&self, path: &RemotePath) -> RemoteResult<String> {
        self.check(RemoteOp::ReadLink, path)?;
        self.inner.read_link(path)
    }

    fn make_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        self.check(RemoteOp::MakeDir, path)?;
        self.inner.make_dir(path)
    }

    fn remove_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        self.check(RemoteOp::RemoveDir, path)?;
        self.inner.remove_dir(path)
    }

    fn remove_file(&self, path: &RemotePath) -> RemoteResult<()> {
        self.check(RemoteOp::RemoveFile, path)?;
        self.inner.remove_file(path)
    }

    fn list_dir(&self, path: &RemotePath) -> RemoteResult<Vec<String>> {
        self.check(RemoteOp::ListDir, path)?;
        self.inner.list_dir(path)
    }

    fn upload_file(&self, local: &Path, remote: &RemotePath) -> RemoteResult<()> {
        self.check(RemoteOp::Upload, remote)?;
        self.inner.upload_file(local, remote)
    }
}
