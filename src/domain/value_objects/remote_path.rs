//! Remote Path Value Object
//!
//! A POSIX-style path on the remote side of the session:
//! - Always `/`-separated, regardless of the local platform
//! - Empty segments are stripped (`a//b/` becomes `a/b`)
//! - May be absolute (`/run/webroots`) or relative (`webroots`)

use std::fmt;

/// A normalized POSIX path on the remote filesystem
///
/// `.` and `..` segments are kept as written; use
/// [`RemotePath::lexically_normalized`] when they must be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RemotePath(String);

impl RemotePath {
    /// Filesystem root (`/`)
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Create a path, normalizing separators
    pub fn new(path: impl AsRef<str>) -> Self {
        let raw = path.as_ref();
        let absolute = raw.starts_with('/');
        let joined = raw
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        if absolute {
            Self(format!("/{}", joined))
        } else {
            Self(joined)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Path segments, without the leading root marker
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|segment| !segment.is_empty())
    }

    /// Last segment, if any
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    /// Join another path onto this one
    ///
    /// An absolute `other` replaces `self`, like POSIX `path.join`.
    pub fn join(&self, other: impl AsRef<str>) -> Self {
        let other = other.as_ref();
        if other.starts_with('/') {
            return Self::new(other);
        }
        if self.is_empty() {
            return Self::new(other);
        }
        Self::new(format!("{}/{}", self.0, other))
    }

    /// Join a sequence of already-split segments
    pub fn join_segments<I, S>(&self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        segments
            .into_iter()
            .fold(self.clone(), |acc, segment| acc.join(segment.as_ref()))
    }

    /// Parent directory
    ///
    /// Returns `None` for the root and for the empty path. The parent of a
    /// single relative segment is the empty path.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() || self.is_empty() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(Self::root()),
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => Some(Self::default()),
        }
    }

    /// Every progressively longer prefix of this path, shortest first
    ///
    /// `/a/b/c` yields `/a`, `/a/b`, `/a/b/c`. The root itself is never
    /// yielded.
    pub fn ancestors_inclusive(&self) -> Vec<Self> {
        let mut current = if self.is_absolute() {
            Self::root()
        } else {
            Self::default()
        };
        self.segments()
            .map(|segment| {
                current = current.join(segment);
                current.clone()
            })
            .collect()
    }

    /// Resolve `.` and `..` segments without touching the remote side
    ///
    /// `..` never climbs above the root of an absolute path.
    pub fn lexically_normalized(&self) -> Self {
        let mut stack: Vec<&str> = Vec::new();
        for segment in self.segments() {
            match segment {
                "." => {}
                ".." => {
                    if matches!(stack.last(), Some(last) if *last != "..") {
                        stack.pop();
                    } else if !self.is_absolute() {
                        stack.push("..");
                    }
                }
                other => stack.push(other),
            }
        }
        let joined = stack.join("/");
        if self.is_absolute() {
            Self(format!("/{}", joined))
        } else {
            Self(joined)
        }
    }

    /// Segment-aware prefix test
    ///
    /// `/run/webroots/www` starts with `/run/webroots`;
    /// `/run/webroots-old` does not.
    pub fn starts_with(&self, prefix: &RemotePath) -> bool {
        if self.is_absolute() != prefix.is_absolute() {
            return false;
        }
        let mut ours = self.segments();
        prefix
            .segments()
            .all(|expected| ours.next() == Some(expected))
    }
}

impl fmt::Display for RemotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RemotePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for RemotePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for RemotePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
