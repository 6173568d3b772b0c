//! webroot-sync CLI
//!
//! Usage: webroot-sync [--json] [--color <WHEN>] <COMMAND>
//!
//! Commands:
//!   deploy  Upload LOCAL_DIST into the remote webroot
//!   wipe    Delete the contents of SFTP_WEBROOT

mod commands;

use anyhow::Result;
use clap::Parser;

use webroot_sync::infrastructure::Interrupt;
use webroot_sync::presentation::{Cli, Commands};

/// Exit status after Ctrl+C
const EXIT_INTERRUPTED: i32 = 130;

fn cancelled() -> ! {
    eprintln!("\nCancelled.");
    std::process::exit(EXIT_INTERRUPTED);
}

fn main() {
    // While a session is open, Ctrl+C only raises the flag; the command
    // closes the session and we exit below.
    let interrupt = Interrupt::new();
    let handler = interrupt.clone();
    if let Err(err) = ctrlc::set_handler(move || {
        if handler.request() {
            cancelled();
        }
    }) {
        eprintln!("Warning: could not install Ctrl+C handler: {}", err);
    }

    let cli = Cli::parse();
    let outcome = run(cli, &interrupt);
    if interrupt.is_requested() {
        cancelled();
    }
    if let Err(err) = outcome {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli, interrupt: &Interrupt) -> Result<()> {
    match cli.command {
        Commands::Deploy => commands::deploy::cmd_deploy(cli.json, cli.color, interrupt),
        Commands::Wipe { yes } => commands::wipe::cmd_wipe(yes, cli.json, cli.color, interrupt),
    }
}
