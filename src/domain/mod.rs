//! Domain Layer
//!
//! Pure types and rules for remote tree synchronization, without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (RemotePath, NodeKind)
//! - `policies/` - Business rules (WipeGuard)
//! - `ports/` - Interface definitions for infrastructure (RemoteSession, SyncEventSink)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Ports & Adapters** - All remote I/O goes through trait-defined ports

pub mod policies;
pub mod ports;
pub mod value_objects;
