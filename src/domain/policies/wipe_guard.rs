//! Wipe Guard Policy
//!
//! Pre-flight rules deciding whether a remote directory may have its
//! contents recursively deleted, and where the symlink fallback may reach.
//! Pure: no remote calls are made here.

use thiserror::Error;

use crate::domain::value_objects::RemotePath;

/// Roots that are never wiped, whatever the configuration says
pub const FORBIDDEN_ROOTS: &[&str] = &["/", "", ".", "..", "/run", "/home", "/root"];

/// Shortest root accepted for wiping
pub const MIN_ROOT_LEN: usize = 5;

/// Default webroot, and default allow-listed prefix for the symlink fallback
pub const DEFAULT_WEBROOT: &str = "/run/webroots";

/// Why a wipe root was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardRailViolation {
    #[error("refusing to wipe suspicious webroot: {root:?}")]
    Forbidden { root: String },

    #[error("refusing to wipe suspicious webroot: {root:?} (shorter than {min} characters)")]
    TooShort { root: String, min: usize },

    #[error("webroot must be an absolute path, got: {root:?}")]
    NotAbsolute { root: String },
}

/// Guard rails for recursive deletion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WipeGuard {
    allowed_prefix: RemotePath,
}

impl WipeGuard {
    /// Create a guard whose symlink fallback is confined to `allowed_prefix`
    pub fn new(allowed_prefix: impl Into<RemotePath>) -> Self {
        Self {
            allowed_prefix: allowed_prefix.into(),
        }
    }

    pub fn allowed_prefix(&self) -> &RemotePath {
        &self.allowed_prefix
    }

    /// Validate a wipe root, returning it normalized
    ///
    /// Checked against the raw string and its trailing-slash-trimmed form,
    /// so `/run/` is as forbidden as `/run`.
    pub fn check_root(&self, root: &str) -> Result<RemotePath, GuardRailViolation> {
        let trimmed = if root.len() > 1 {
            root.trim_end_matches('/')
        } else {
            root
        };

        if FORBIDDEN_ROOTS.contains(&root) || FORBIDDEN_ROOTS.contains(&trimmed) {
            return Err(GuardRailViolation::Forbidden {
                root: root.to_string(),
            });
        }
        if trimmed.chars().count() < MIN_ROOT_LEN {
            return Err(GuardRailViolation::TooShort {
                root: root.to_string(),
                min: MIN_ROOT_LEN,
            });
        }
        if !root.starts_with('/') {
            return Err(GuardRailViolation::NotAbsolute {
                root: root.to_string(),
            });
        }

        let normalized = RemotePath::new(root).lexically_normalized();
        if FORBIDDEN_ROOTS.contains(&normalized.as_str())
            || normalized.as_str().chars().count() < MIN_ROOT_LEN
        {
            return Err(GuardRailViolation::Forbidden {
                root: root.to_string(),
            });
        }

        Ok(RemotePath::new(root))
    }

    /// Whether a resolved symlink target may be wiped by the fallback
    pub fn allows_target(&self, target: &RemotePath) -> bool {
        target
            .lexically_normalized()
            .starts_with(&self.allowed_prefix)
    }
}

impl Default for WipeGuard {
    fn default() -> Self {
        Self::new(DEFAULT_WEBROOT)
    }
}
