//! Property tests for upload and wipe over generated trees.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;
use tempfile::tempdir;

use webroot_sync::application::{SafeRecursiveDeleter, TreeUploader};
use webroot_sync::domain::policies::WipeGuard;
use webroot_sync::domain::ports::NoopEventSink;
use webroot_sync::RemotePath;

use crate::common::{MemorySession, Node};

fn relative_file() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[a-z][a-z0-9_]{0,6}").unwrap();
    proptest::collection::vec(segment, 1..4).prop_map(|segments| segments.join("/"))
}

/// File paths where no file is also a directory of another
fn tree() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set(relative_file(), 0..12).prop_map(|files| {
        files
            .iter()
            .filter(|f| !files.iter().any(|other| other.starts_with(&format!("{}/", f))))
            .cloned()
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every local file arrives at `remote_root/<relative path>`
    /// with its content, and the count matches.
    #[test]
    fn property_upload_is_complete(files in tree()) {
        let dir = tempdir().unwrap();
        for (i, file) in files.iter().enumerate() {
            let path = dir.path().join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, format!("content {}", i)).unwrap();
        }
        let session = MemorySession::new();
        let root = RemotePath::new("/run/webroots/www");

        let result = TreeUploader::new(&session, Arc::new(NoopEventSink))
            .upload_tree(dir.path(), &root)
            .unwrap();

        prop_assert_eq!(result.files, files.len());
        for (i, file) in files.iter().enumerate() {
            let remote = format!("/run/webroots/www/{}", file);
            let expected = Node::File(format!("content {}", i).into_bytes());
            prop_assert_eq!(session.get(&remote), Some(expected));
        }
    }

    /// PROPERTY: Wiping after an upload leaves the root empty but present.
    #[test]
    fn property_wipe_after_upload_empties_root(files in tree()) {
        let dir = tempdir().unwrap();
        for file in &files {
            let path = dir.path().join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "x").unwrap();
        }
        let session = MemorySession::new();
        let root = RemotePath::new("/run/webroots/www");
        TreeUploader::new(&session, Arc::new(NoopEventSink))
            .upload_tree(dir.path(), &root)
            .unwrap();

        let summary = SafeRecursiveDeleter::new(&session, Arc::new(NoopEventSink), WipeGuard::default())
            .delete_contents_of("/run/webroots/www")
            .unwrap();

        prop_assert_eq!(summary.files, files.len());
        prop_assert_eq!(summary.warnings, 0);
        prop_assert!(session.descendants("/run/webroots/www").is_empty());
        prop_assert_eq!(session.get("/run/webroots/www"), Some(Node::Dir));
    }
}
