//! Common test utilities for webroot-sync integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory plus a scrubbed environment for
//!   running the CLI
//! - `MemorySession`: In-memory `RemoteSession` for library-level tests

#![allow(dead_code)]

pub mod remote;

pub use env::*;
pub use remote::*;
