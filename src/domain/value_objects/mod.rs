//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod node_kind;
mod remote_path;

pub use node_kind::NodeKind;
pub use remote_path::RemotePath;
