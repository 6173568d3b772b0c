//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, policies, ports)
//! - Does NOT talk to SFTP or the terminal directly
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Resolve the webroot, upload the local tree, list the result
//! - `WipeUseCase` - Guard rails, directory precheck, recursive deletion
//!
//! ## Services
//!
//! - `DirectoryEnsurer` - Idempotent remote `mkdir -p`
//! - `WebrootResolver` - Webroot discovery and target selection
//! - `TreeUploader` - Local tree to remote directory
//! - `SafeRecursiveDeleter` - Symlink-safe bottom-up deletion

pub mod delete;
pub mod deploy;
pub mod ensure_dir;
pub mod upload;
pub mod webroot;
pub mod wipe;

pub use delete::{resolve_link_target, SafeRecursiveDeleter, WipeSummary};
pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use ensure_dir::DirectoryEnsurer;
pub use upload::{snapshot_local_tree, LocalEntry, LocalKind, TreeUploader, UploadResult};
pub use webroot::{ResolvedWebroot, WebrootResolver, WEBROOTS_LINK, WWW_DIR};
pub use wipe::{WipeOptions, WipeResult, WipeUseCase};
