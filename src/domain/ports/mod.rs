//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod remote_session;
pub mod sync_events;

pub use remote_session::{
    Disposition, RemoteError, RemoteErrorKind, RemoteOp, RemoteResult, RemoteSession,
};
pub use sync_events::{NoopEventSink, SyncEvent, SyncEventSink};
