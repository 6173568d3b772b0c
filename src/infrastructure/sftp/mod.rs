//! SFTP adapter
//!
//! Implements the `RemoteSession` port over the SFTP subsystem of an
//! authenticated SSH connection (`russh` + `russh-sftp`).

mod errors;
mod host_key;
mod session;

pub use errors::{kind_from_status, map_sftp_error};
pub use host_key::HostKeyCheck;
pub use session::SftpSession;
