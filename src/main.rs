//! Contact Book - Main entry point
//!
//! Runs the interactive prompt on stdin/stdout. Logs go to stderr so they
//! never interleave with the conversation.

use anyhow::{Context, Result};
use contact_book::{run_session, CommandDispatcher, Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact book with data file: {}",
        config.data_file.display()
    );

    let repository = JsonFileRepository::new(&config.data_file);
    let dispatcher = CommandDispatcher::new(config.window_days);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Err(e) = run_session(&repository, &dispatcher, stdin.lock(), &mut stdout) {
        error!("Session failed: {}", e);
        return Err(e).with_context(|| {
            format!("Address book session failed ({})", config.data_file.display())
        });
    }

    info!("Contact book shutdown complete");
    Ok(())
}
