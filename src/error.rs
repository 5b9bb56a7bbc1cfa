//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Domain-level validation errors live in [`crate::domain::errors`]
//! and are wrapped here for propagation to the command layer.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while operating on records and the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already present on the record
    #[error("Phone number already exists: {0}")]
    DuplicatePhone(String),

    /// The phone number targeted by an edit is absent
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No record is stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// A stored birthday has no occurrence in the target year (Feb 29 on a
    /// non-leap year)
    #[error("Birthday {date} has no occurrence in year {year}")]
    NoOccurrence { date: String, year: i32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading or saving snapshots.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file is not valid JSON or fails field validation
    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an incompatible schema version
    #[error("Unsupported snapshot version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
