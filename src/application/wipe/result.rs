//! Wipe result types

use crate::application::delete::WipeSummary;
use crate::domain::value_objects::RemotePath;

/// Result of a wipe operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WipeResult {
    /// Root that was emptied
    pub root: RemotePath,
    pub summary: WipeSummary,
}

impl WipeResult {
    /// Entries removed, of any kind
    pub fn removed(&self) -> usize {
        self.summary.files + self.summary.directories + self.summary.symlinks
    }

    pub fn has_warnings(&self) -> bool {
        self.summary.warnings > 0
    }
}
