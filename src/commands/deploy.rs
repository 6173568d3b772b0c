//! Deploy command handler

use anyhow::Result;

use webroot_sync::application::{DeployOptions, DeployUseCase};
use webroot_sync::config::DeployConfig;
use webroot_sync::infrastructure::{Interrupt, InterruptibleSession, SftpSession};
use webroot_sync::presentation::output::{
    deploy_summary_json, render_deploy_header, render_listing,
};
use webroot_sync::presentation::{create_event_sink, ColorWhen};

/// Execute the deploy command
pub fn cmd_deploy(json: bool, color: Option<ColorWhen>, interrupt: &Interrupt) -> Result<()> {
    // Validated before any connection is attempted
    let config = DeployConfig::from_env()?;
    let options = DeployOptions::from(&config);
    let events = create_event_sink("deploy", json, color);

    if !json {
        println!("{}", render_deploy_header(&config.local_dist));
    }

    let mut session = SftpSession::connect(&config.session)?;
    let open = interrupt.session_open();
    let result = DeployUseCase::new(InterruptibleSession::new(&session, interrupt.clone()), events)
        .execute(&options);
    let closed = session.close();
    drop(open);
    let result = result?;
    if let Err(err) = closed {
        eprintln!("[warn] {}", err);
    }

    if json {
        println!("{}", deploy_summary_json(&config.local_dist, &result));
    } else {
        print!("{}", render_listing(result.listing.as_deref()));
    }
    Ok(())
}
