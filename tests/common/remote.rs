//! In-memory remote filesystem for integration tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

use webroot_sync::domain::ports::{RemoteError, RemoteOp, RemoteResult, RemoteSession};
use webroot_sync::{NodeKind, RemotePath};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Dir,
    File(Vec<u8>),
    Symlink(String),
}

/// Flat map of absolute path to node; no link following in ancestors
pub struct MemorySession {
    nodes: RefCell<BTreeMap<String, Node>>,
}

fn key(path: &RemotePath) -> String {
    RemotePath::root()
        .join(path.as_str())
        .lexically_normalized()
        .to_string()
}

impl MemorySession {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), Node::Dir);
        Self {
            nodes: RefCell::new(nodes),
        }
    }

    pub fn insert(&self, path: &str, node: Node) {
        let target = RemotePath::new(path);
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = target.parent() {
            for ancestor in parent.ancestors_inclusive() {
                nodes.entry(ancestor.to_string()).or_insert(Node::Dir);
            }
        }
        nodes.insert(key(&target), node);
    }

    pub fn get(&self, path: &str) -> Option<Node> {
        self.nodes.borrow().get(&key(&RemotePath::new(path))).cloned()
    }

    /// Paths strictly below `dir`
    pub fn descendants(&self, dir: &str) -> Vec<String> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        self.nodes
            .borrow()
            .keys()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect()
    }

    fn children(&self, dir: &str) -> Vec<String> {
        let prefix = if dir == "/" {
            "/".to_string()
        } else {
            format!("{}/", dir)
        };
        self.nodes
            .borrow()
            .keys()
            .filter(|k| k.as_str() != "/" && k.starts_with(&prefix))
            .map(|k| k[prefix.len()..].to_string())
            .filter(|rest| !rest.contains('/'))
            .collect()
    }

    fn kind(node: Option<&Node>) -> NodeKind {
        match node {
            None => NodeKind::Missing,
            Some(Node::Dir) => NodeKind::Directory,
            Some(Node::File(_)) => NodeKind::File,
            Some(Node::Symlink(_)) => NodeKind::Symlink,
        }
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteSession for MemorySession {
    fn stat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        let nodes = self.nodes.borrow();
        let mut current = key(path);
        for _ in 0..8 {
            match nodes.get(&current) {
                Some(Node::Symlink(target)) => {
                    let base = RemotePath::new(&current)
                        .parent()
                        .unwrap_or_else(RemotePath::root);
                    current = key(&base.join(target));
                }
                other => return Ok(Self::kind(other)),
            }
        }
        Ok(NodeKind::Missing)
    }

    fn lstat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        Ok(Self::kind(self.nodes.borrow().get(&key(path))))
    }

    fn read_link(&self, path: &RemotePath) -> RemoteResult<String> {
        match self.nodes.borrow().get(&key(path)) {
            Some(Node::Symlink(target)) => Ok(target.clone()),
            _ => Err(RemoteError::failure(RemoteOp::ReadLink, path.clone(), "not a link")),
        }
    }

    fn make_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        let k = key(path);
        let mut nodes = self.nodes.borrow_mut();
        if nodes.contains_key(&k) {
            return Err(RemoteError::failure(RemoteOp::MakeDir, path.clone(), "exists"));
        }
        let parent = RemotePath::new(&k).parent().unwrap_or_else(RemotePath::root);
        if nodes.get(parent.as_str()) != Some(&Node::Dir) {
            return Err(RemoteError::not_found(RemoteOp::MakeDir, path.clone()));
        }
        nodes.insert(k, Node::Dir);
        Ok(())
    }

    fn remove_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        let k = key(path);
        if !self.children(&k).is_empty() {
            return Err(RemoteError::failure(RemoteOp::RemoveDir, path.clone(), "not empty"));
        }
        match self.nodes.borrow_mut().remove(&k) {
            Some(Node::Dir) => Ok(()),
            _ => Err(RemoteError::not_found(RemoteOp::RemoveDir, path.clone())),
        }
    }

    fn remove_file(&self, path: &RemotePath) -> RemoteResult<()> {
        let k = key(path);
        let mut nodes = self.nodes.borrow_mut();
        match nodes.get(&k) {
            Some(Node::File(_)) | Some(Node::Symlink(_)) => {
                nodes.remove(&k);
                Ok(())
            }
            Some(Node::Dir) => Err(RemoteError::failure(
                RemoteOp::RemoveFile,
                path.clone(),
                "is a directory",
            )),
            None => Err(RemoteError::not_found(RemoteOp::RemoveFile, path.clone())),
        }
    }

    fn list_dir(&self, path: &RemotePath) -> RemoteResult<Vec<String>> {
        let k = key(path);
        match self.nodes.borrow().get(&k) {
            Some(Node::Dir) => {}
            _ => return Err(RemoteError::not_found(RemoteOp::ListDir, path.clone())),
        }
        Ok(self.children(&k))
    }

    fn upload_file(&self, local: &Path, remote: &RemotePath) -> RemoteResult<()> {
        let bytes = std::fs::read(local)
            .map_err(|e| RemoteError::failure(RemoteOp::Upload, remote.clone(), e.to_string()))?;
        let k = key(remote);
        let parent = RemotePath::new(&k).parent().unwrap_or_else(RemotePath::root);
        let mut nodes = self.nodes.borrow_mut();
        if nodes.get(parent.as_str()) != Some(&Node::Dir) {
            return Err(RemoteError::not_found(RemoteOp::Upload, remote.clone()));
        }
        nodes.insert(k, Node::File(bytes));
        Ok(())
    }
}
