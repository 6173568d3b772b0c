//! Output Rendering
//!
//! Final summaries printed by the commands. Per-action progress lines come
//! from the event sinks instead.

use std::path::Path;

use crate::application::{DeployResult, WipeResult};

/// Names shown in the post-deploy listing before it is cut short
pub const LISTING_LIMIT: usize = 50;

/// Opening line of a deploy
pub fn render_deploy_header(local_dist: &Path) -> String {
    format!("Local dist: {}", local_dist.display())
}

/// Top-level names of the deploy target, capped at [`LISTING_LIMIT`]
///
/// Empty when the target could not be listed; that was already reported as
/// a warning.
pub fn render_listing(names: Option<&[String]>) -> String {
    let Some(names) = names else {
        return String::new();
    };

    let mut out = String::from("Remote contains (top-level):\n");
    for name in names.iter().take(LISTING_LIMIT) {
        out.push_str(&format!("  {}\n", name));
    }
    if names.len() > LISTING_LIMIT {
        out.push_str(&format!("  ... ({} more)\n", names.len() - LISTING_LIMIT));
    }
    out
}

pub fn render_wipe_header(root: &str) -> String {
    format!("Wiping contents of: {}", root)
}

pub fn render_wipe_summary(result: &WipeResult) -> String {
    let summary = &result.summary;
    let mut out = format!(
        "Removed {} files, {} directories, {} symlinks",
        summary.files, summary.directories, summary.symlinks
    );
    if summary.warnings > 0 {
        out.push_str(&format!(" ({} warnings)", summary.warnings));
    }
    out.push_str("\nDone.");
    out
}

/// Final NDJSON line of a deploy
pub fn deploy_summary_json(local_dist: &Path, result: &DeployResult) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "deploy",
        "local_dist": local_dist.display().to_string(),
        "root": result.root.as_str(),
        "target": result.target.as_str(),
        "created": result.created,
        "uploaded": result.uploaded,
        "listing": result.listing,
    })
}

/// Final NDJSON line of a wipe
pub fn wipe_summary_json(result: &WipeResult) -> serde_json::Value {
    serde_json::json!({
        "event": "complete",
        "command": "wipe",
        "root": result.root.as_str(),
        "removed": result.summary,
    })
}
