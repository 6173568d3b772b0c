//! Deploy Result

use crate::application::upload::UploadResult;
use crate::domain::value_objects::RemotePath;

/// Result of a deploy operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    /// Webroot discovered through the `webroots` link (or the default)
    pub root: RemotePath,
    /// Directory the tree was uploaded into
    pub target: RemotePath,
    /// Whether `target` was created by this run
    pub created: bool,
    pub uploaded: UploadResult,
    /// Sorted top-level names of `target`; `None` when it could not be listed
    pub listing: Option<Vec<String>>,
}

impl DeployResult {
    pub fn files_uploaded(&self) -> usize {
        self.uploaded.files
    }
}
