//! Wipe command handler
//!
//! Empties the configured webroot after guard rails and, on a terminal,
//! an explicit confirmation.

use anyhow::Result;
use is_terminal::IsTerminal;

use webroot_sync::application::{WipeOptions, WipeUseCase};
use webroot_sync::config::WipeConfig;
use webroot_sync::infrastructure::{Interrupt, InterruptibleSession, SftpSession};
use webroot_sync::presentation::output::{
    render_wipe_header, render_wipe_summary, wipe_summary_json,
};
use webroot_sync::presentation::{create_event_sink, ColorWhen};

/// Execute the wipe command
pub fn cmd_wipe(
    yes: bool,
    json: bool,
    color: Option<ColorWhen>,
    interrupt: &Interrupt,
) -> Result<()> {
    let config = WipeConfig::from_env()?;
    let options = WipeOptions::from(&config);

    // Refuse dangerous roots before touching the network
    options.guard().check_root(&options.webroot)?;

    if !json {
        println!("{}", render_wipe_header(&options.webroot));
    }

    if !yes && std::io::stdin().is_terminal() {
        use dialoguer::Confirm;
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete everything inside {} on {}?",
                options.webroot, config.session.host
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let events = create_event_sink("wipe", json, color);
    let mut session = SftpSession::connect(&config.session)?;
    let open = interrupt.session_open();
    let result = WipeUseCase::new(InterruptibleSession::new(&session, interrupt.clone()), events)
        .execute(&options);
    let closed = session.close();
    drop(open);
    let result = result?;
    if let Err(err) = closed {
        eprintln!("[warn] {}", err);
    }

    if json {
        println!("{}", wipe_summary_json(&result));
    } else {
        println!("{}", render_wipe_summary(&result));
    }
    Ok(())
}
