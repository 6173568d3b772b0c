//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color) are inherited by all subcommands
//! - Connection settings come from the environment, not from flags

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Resolve against whether the warning stream is a terminal
    pub fn enabled(self, is_tty: bool) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => is_tty,
        }
    }
}

/// Mirror a local build onto an SFTP webroot, or wipe that webroot
#[derive(Parser, Debug)]
#[command(name = "webroot-sync")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Connection: SFTP_HOST, SFTP_USER, SFTP_PASSWORD, SFTP_PORT (default 22).")]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Upload LOCAL_DIST into the remote webroot (REMOTE_WEBROOT overrides the target)
    Deploy,

    /// Delete everything inside SFTP_WEBROOT, keeping the directory itself
    Wipe {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
