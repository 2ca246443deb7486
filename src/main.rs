//! Contact Manager - Main entry point
//!
//! Runs the contact list console on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use contact_manager::server::{run_server, ContactConsole};
use contact_manager::{Config, ContactManager};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the log filter
    let config = Config::from_env();

    let fallback_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting contact manager in {} view", config.default_view);

    let mut console = ContactConsole::new(ContactManager::new(config.default_view));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_server(&mut console, stdin.lock(), stdout.lock())?;

    info!(
        contacts = console.manager().store().len(),
        "Contact manager shutdown complete"
    );
    Ok(())
}
