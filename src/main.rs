//! Address Book Assistant - Main entry point
//!
//! Loads the address book, runs the interactive loop on stdin/stdout and
//! saves the book when the user leaves.

use address_book_assistant::{run_repl, Config, Flow, JsonFileRepository, Session};
use anyhow::{bail, Context, Result};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays the conversation with the user
    let log_level = config.log_level.as_str();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting address book assistant with storage file: {}",
        config.storage_path.display()
    );

    let repository = JsonFileRepository::new(&config.storage_path);
    let mut session = match Session::open(repository, config.birthday_window_days) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            let path = config.storage_path.display();
            let message = format!("Could not load address book from {}", path);
            return Err(e).context(message);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let flow = run_repl(&mut session, stdin.lock(), &mut stdout)?;

    if let Flow::Exit { saved: false } = flow {
        bail!("Address book was not saved");
    }

    info!("Address book assistant shutdown complete");
    Ok(())
}
