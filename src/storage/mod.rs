//! Versioned snapshot persistence for the address book.
//!
//! The whole book is written as one JSON document with an explicit schema
//! version, so a future format change fails loudly on old files instead of
//! silently corrupting them. A save is a full overwrite; there is no
//! partial-write recovery.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The snapshot schema version this build reads and writes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk shape of a saved address book.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,

    #[serde(default)]
    records: Vec<Record>,
}

/// Loads and saves address book snapshots at a fixed path.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store for the given snapshot path. Nothing is touched on
    /// disk until `load` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the address book from disk.
    ///
    /// A missing file is not an error: it yields a fresh empty book, so the
    /// first run starts clean.
    ///
    /// # Errors
    ///
    /// `StorageError::Io` on read failures other than absence,
    /// `StorageError::Json` on malformed content, and
    /// `StorageError::UnsupportedVersion` when the file was written by an
    /// incompatible schema.
    pub fn load(&self) -> StorageResult<AddressBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No snapshot found, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let book: AddressBook = snapshot.records.into_iter().collect();
        debug!(records = book.len(), "Snapshot loaded");
        Ok(book)
    }

    /// Write the address book to disk, replacing any previous snapshot.
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            records: book.records().cloned().collect(),
        };

        let raw = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), records = book.len(), "Snapshot saved");
        Ok(())
    }
}
