//! Contact Assistant - Main entry point
//!
//! Loads configuration and the saved address book, runs the interactive
//! loop, and saves on exit. Load and save are explicit lifecycle calls
//! here; no ambient global state holds the book.

use anyhow::Result;
use contact_assistant::{repl, Config, SnapshotStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr; stdout belongs to the conversation
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.snapshot_path.display(), "Configuration loaded");

    let store = SnapshotStore::new(&config.snapshot_path);
    let mut book = match store.load() {
        Ok(book) => {
            info!(records = book.len(), "Address book loaded");
            book
        }
        Err(e) => {
            error!("Failed to load the address book: {}", e);
            return Err(e.into());
        }
    };

    repl::run(&mut book, &store, &config)?;

    info!("Shutdown complete");
    Ok(())
}
