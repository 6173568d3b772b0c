//! Command handlers
//!
//! Each handler reads its configuration, opens the SFTP session, runs the
//! use case and prints the summary.

pub mod deploy;
pub mod wipe;
