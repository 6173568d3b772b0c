//! Test doubles for the remote session and the event sink

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use crate::domain::ports::{
    RemoteError, RemoteErrorKind, RemoteOp, RemoteResult, RemoteSession, SyncEvent, SyncEventSink,
};
use crate::domain::value_objects::{NodeKind, RemotePath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeNode {
    Dir,
    File(Vec<u8>),
    Symlink(String),
}

/// In-memory remote tree
///
/// Relative paths are anchored at `/`. Every primitive call is logged so
/// tests can assert what was (or was not) issued.
pub struct FakeSession {
    nodes: RefCell<BTreeMap<String, FakeNode>>,
    calls: RefCell<Vec<(RemoteOp, String)>>,
    failures: RefCell<HashMap<(RemoteOp, String), RemoteErrorKind>>,
    racing_mkdirs: RefCell<HashSet<String>>,
}

fn key(path: &RemotePath) -> String {
    let anchored = if path.is_absolute() {
        path.clone()
    } else {
        RemotePath::root().join(path.as_str())
    };
    anchored.lexically_normalized().to_string()
}

impl FakeSession {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), FakeNode::Dir);
        Self {
            nodes: RefCell::new(nodes),
            calls: RefCell::new(Vec::new()),
            failures: RefCell::new(HashMap::new()),
            racing_mkdirs: RefCell::new(HashSet::new()),
        }
    }

    /// Add a directory and any missing ancestors
    pub fn with_dir(self, path: &str) -> Self {
        self.insert_ancestors(path);
        self.nodes.borrow_mut().insert(key(&path.into()), FakeNode::Dir);
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.insert_ancestors(path);
        self.nodes
            .borrow_mut()
            .insert(key(&path.into()), FakeNode::File(content.as_bytes().to_vec()));
        self
    }

    pub fn with_symlink(self, path: &str, target: &str) -> Self {
        self.insert_ancestors(path);
        self.nodes
            .borrow_mut()
            .insert(key(&path.into()), FakeNode::Symlink(target.to_string()));
        self
    }

    /// Make `op` on `path` fail with `kind`, without side effects
    pub fn failing(self, op: RemoteOp, path: &str, kind: RemoteErrorKind) -> Self {
        self.failures
            .borrow_mut()
            .insert((op, key(&path.into())), kind);
        self
    }

    /// Simulate another agent creating `path` right before our `make_dir`
    pub fn racing_mkdir(self, path: &str) -> Self {
        self.racing_mkdirs.borrow_mut().insert(key(&path.into()));
        self
    }

    fn insert_ancestors(&self, path: &str) {
        let target = RemotePath::new(key(&path.into()));
        if let Some(parent) = target.parent() {
            let mut nodes = self.nodes.borrow_mut();
            for ancestor in parent.ancestors_inclusive() {
                nodes.entry(ancestor.to_string()).or_insert(FakeNode::Dir);
            }
        }
    }

    pub fn node(&self, path: &str) -> Option<FakeNode> {
        self.nodes.borrow().get(&key(&path.into())).cloned()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.node(path).is_some()
    }

    pub fn file_contents(&self, path: &str) -> Option<String> {
        match self.node(path) {
            Some(FakeNode::File(bytes)) => Some(String::from_utf8_lossy(&bytes).to_string()),
            _ => None,
        }
    }

    /// Every path currently stored, sorted
    pub fn paths(&self) -> Vec<String> {
        self.nodes.borrow().keys().cloned().collect()
    }

    pub fn calls(&self) -> Vec<(RemoteOp, String)> {
        self.calls.borrow().clone()
    }

    pub fn calls_for(&self, op: RemoteOp) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter(|(o, _)| *o == op)
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// Log the call, apply scripted failures, and return the storage key
    ///
    /// Symlinks in the path's ancestors are followed, as a server would.
    fn record(&self, op: RemoteOp, path: &RemotePath) -> RemoteResult<String> {
        let k = key(path);
        self.calls.borrow_mut().push((op, k.clone()));
        if let Some(kind) = self.failures.borrow().get(&(op, k.clone())) {
            return Err(RemoteError::new(op, path.clone(), *kind, "scripted"));
        }
        Ok(self.locate(&k))
    }

    fn locate(&self, k: &str) -> String {
        let path = RemotePath::new(k);
        let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
            return k.to_string();
        };
        let parent_key = self.locate(parent.as_str());
        let dir = match self.resolve(&parent_key) {
            Some((dir, FakeNode::Dir)) => dir,
            _ => parent_key,
        };
        RemotePath::new(dir).join(name).to_string()
    }

    fn children_of(&self, dir: &str) -> Vec<String> {
        let prefix = if dir == "/" {
            "/".to_string()
        } else {
            format!("{}/", dir)
        };
        self.nodes
            .borrow()
            .keys()
            .filter(|k| k.as_str() != "/" && k.starts_with(&prefix))
            .filter(|k| !k[prefix.len()..].contains('/'))
            .map(|k| k[prefix.len()..].to_string())
            .collect()
    }

    fn resolve(&self, k: &str) -> Option<(String, FakeNode)> {
        let mut current = k.to_string();
        for _ in 0..8 {
            let node = self.nodes.borrow().get(&current).cloned()?;
            match node {
                FakeNode::Symlink(target) => {
                    let link = RemotePath::new(&current);
                    let base = link.parent().unwrap_or_else(RemotePath::root);
                    current = self.locate(&key(&base.join(&target)));
                }
                other => return Some((current, other)),
            }
        }
        None
    }
}

impl Default for FakeSession {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_of(node: &FakeNode) -> NodeKind {
    match node {
        FakeNode::Dir => NodeKind::Directory,
        FakeNode::File(_) => NodeKind::File,
        FakeNode::Symlink(_) => NodeKind::Symlink,
    }
}

impl RemoteSession for FakeSession {
    fn stat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        let k = self.record(RemoteOp::Stat, path)?;
        Ok(self
            .resolve(&k)
            .map(|(_, node)| kind_of(&node))
            .unwrap_or(NodeKind::Missing))
    }

    fn lstat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        let k = self.record(RemoteOp::Lstat, path)?;
        Ok(self
            .nodes
            .borrow()
            .get(&k)
            .map(kind_of)
            .unwrap_or(NodeKind::Missing))
    }

    fn read_link(&self, path: &RemotePath) -> RemoteResult<String> {
        let k = self.record(RemoteOp::ReadLink, path)?;
        match self.nodes.borrow().get(&k) {
            Some(FakeNode::Symlink(target)) => Ok(target.clone()),
            Some(_) => Err(RemoteError::failure(RemoteOp::ReadLink, path.clone(), "not a link")),
            None => Err(RemoteError::not_found(RemoteOp::ReadLink, path.clone())),
        }
    }

    fn make_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        let k = self.record(RemoteOp::MakeDir, path)?;
        if self.racing_mkdirs.borrow_mut().remove(&k) {
            self.nodes.borrow_mut().insert(k, FakeNode::Dir);
            return Err(RemoteError::failure(RemoteOp::MakeDir, path.clone(), "already exists"));
        }
        if self.nodes.borrow().contains_key(&k) {
            return Err(RemoteError::failure(RemoteOp::MakeDir, path.clone(), "already exists"));
        }
        let parent = RemotePath::new(&k).parent().unwrap_or_else(RemotePath::root);
        if self.nodes.borrow().get(parent.as_str()) != Some(&FakeNode::Dir) {
            return Err(RemoteError::not_found(RemoteOp::MakeDir, path.clone()));
        }
        self.nodes.borrow_mut().insert(k, FakeNode::Dir);
        Ok(())
    }

    fn remove_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        let k = self.record(RemoteOp::RemoveDir, path)?;
        match self.nodes.borrow().get(&k) {
            Some(FakeNode::Dir) => {}
            Some(_) => {
                return Err(RemoteError::failure(RemoteOp::RemoveDir, path.clone(), "not a directory"))
            }
            None => return Err(RemoteError::not_found(RemoteOp::RemoveDir, path.clone())),
        }
        if !self.children_of(&k).is_empty() {
            return Err(RemoteError::failure(RemoteOp::RemoveDir, path.clone(), "directory not empty"));
        }
        self.nodes.borrow_mut().remove(&k);
        Ok(())
    }

    fn remove_file(&self, path: &RemotePath) -> RemoteResult<()> {
        let k = self.record(RemoteOp::RemoveFile, path)?;
        match self.nodes.borrow().get(&k) {
            Some(FakeNode::Dir) => {
                return Err(RemoteError::failure(RemoteOp::RemoveFile, path.clone(), "is a directory"))
            }
            Some(_) => {}
            None => return Err(RemoteError::not_found(RemoteOp::RemoveFile, path.clone())),
        }
        self.nodes.borrow_mut().remove(&k);
        Ok(())
    }

    fn list_dir(&self, path: &RemotePath) -> RemoteResult<Vec<String>> {
        let k = self.record(RemoteOp::ListDir, path)?;
        match self.resolve(&k) {
            Some((dir, FakeNode::Dir)) => Ok(self.children_of(&dir)),
            Some(_) => Err(RemoteError::failure(RemoteOp::ListDir, path.clone(), "not a directory")),
            None => Err(RemoteError::not_found(RemoteOp::ListDir, path.clone())),
        }
    }

    fn upload_file(&self, local: &Path, remote: &RemotePath) -> RemoteResult<()> {
        let k = self.record(RemoteOp::Upload, remote)?;
        let parent = RemotePath::new(&k).parent().unwrap_or_else(RemotePath::root);
        if self.nodes.borrow().get(parent.as_str()) != Some(&FakeNode::Dir) {
            return Err(RemoteError::not_found(RemoteOp::Upload, remote.clone()));
        }
        if self.nodes.borrow().get(&k) == Some(&FakeNode::Dir) {
            return Err(RemoteError::failure(RemoteOp::Upload, remote.clone(), "is a directory"));
        }
        let bytes = std::fs::read(local)
            .map_err(|e| RemoteError::failure(RemoteOp::Upload, remote.clone(), e.to_string()))?;
        self.nodes.borrow_mut().insert(k, FakeNode::File(bytes));
        Ok(())
    }
}

/// Event sink that records everything it receives
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SyncEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SyncEventSink for RecordingEventSink {
    fn on_event(&self, event: SyncEvent) {
        self.events.lock().unwrap().push(event);
    }
}
