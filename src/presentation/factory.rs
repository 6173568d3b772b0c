//! Sink Factory
//!
//! Picks the event sink for a command from the global output flags.

use std::sync::Arc;

use is_terminal::IsTerminal;

use crate::domain::ports::SyncEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink};

use super::cli::ColorWhen;

/// Whether colored warnings should be written to stderr
pub fn color_enabled(color: Option<ColorWhen>) -> bool {
    let is_tty = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();
    color.unwrap_or_default().enabled(is_tty)
}

/// Event sink for `command` (`"deploy"` or `"wipe"`)
pub fn create_event_sink(
    command: &'static str,
    json: bool,
    color: Option<ColorWhen>,
) -> Arc<dyn SyncEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stdio(color_enabled(color)))
    }
}
