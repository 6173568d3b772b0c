//! Event Sink Implementations
//!
//! Provides concrete implementations of SyncEventSink:
//! - ConsoleEventSink: Tagged progress lines
//! - JsonEventSink: NDJSON output for CI/automation

mod console;
mod json;

pub use console::{format_event, ConsoleEventSink};
pub use json::JsonEventSink;
