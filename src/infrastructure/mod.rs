//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `sftp/` - RemoteSession over SSH/SFTP
//! - `events/` - Event sinks (console lines, NDJSON)
//! - `interrupt` - Ctrl-C flag and the session decorator that honors it

pub mod events;
pub mod interrupt;
pub mod sftp;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use interrupt::{Interrupt, InterruptibleSession, OpenSession};
pub use sftp::SftpSession;
