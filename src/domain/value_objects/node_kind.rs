//! Remote node classification

use std::fmt;

/// What a remote path currently denotes
///
/// Whether `Symlink` can be observed depends on the query: a link-aware stat
/// reports the link itself, a link-following stat reports its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    File,
    Directory,
    Symlink,
    Missing,
}

impl NodeKind {
    pub fn is_dir(self) -> bool {
        self == NodeKind::Directory
    }

    pub fn exists(self) -> bool {
        self != NodeKind::Missing
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::File => "file",
            NodeKind::Directory => "directory",
            NodeKind::Symlink => "symlink",
            NodeKind::Missing => "missing",
        };
        f.write_str(label)
    }
}
