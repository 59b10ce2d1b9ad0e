//! Contact Assistant - Main entry point
//!
//! Loads the address book, runs the interactive prompt on stdin/stdout and
//! saves the book when the user closes the session.

use anyhow::Result;
use contact_assistant::{run_session, AddressBookRepository, Assistant, Config, JsonFileRepository};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config_result = Config::from_env();
    let log_level = config_result
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Logs go to stderr; stdout carries the prompt and replies
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config_result {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repo = JsonFileRepository::new(&config.data_file);
    let book = match repo.load() {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting with {} contacts from {}",
        book.len(),
        config.data_file.display()
    );

    let mut assistant = Assistant::new(book).with_birthday_window(config.birthday_window_days);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = run_session(&mut assistant, &repo, stdin.lock(), &mut stdout) {
        error!("Session ended with an error: {}", e);
        return Err(e.into());
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}
