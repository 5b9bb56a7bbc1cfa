//! Contact Assistant - an interactive console assistant for a small
//! personal address book.
//!
//! Contacts have a unique name, validated 10-digit phone numbers, and an
//! optional `DD.MM.YYYY` birthday. An upcoming-birthdays query reports
//! congratulation dates within a window, shifting weekend birthdays to the
//! following Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (Name, Phone, Birthday)
//! - **models**: Record and AddressBook with the birthday query
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **storage**: versioned JSON snapshot persistence
//! - **commands**: line parsing and command handlers
//! - **repl**: the interactive loop

// Re-export commonly used types
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use commands::{Command, ParseError};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use storage::SnapshotStore;
