//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Choosing the event sink for the requested output mode
//! - Summary rendering (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Event sink selection
//! - `output` - Summary rendering

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{color_enabled, create_event_sink};
