//! # Storage Layer
//!
//! This module defines the storage abstraction for rolo. The [`SnapshotStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Snapshot Semantics
//!
//! A store only ever reads or writes the **whole collection**. There is no
//! per-record persistence, no append mode, and no write-ahead log: every
//! mutating command saves a full snapshot, so the backing file always
//! reflects the last successful mutation. A crash in the middle of a write
//! can leave a short file; `load` drops any partial trailing record and
//! `doctor` rewrites the file cleanly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One data file (default `contacts.dat`) of fixed-size binary records
//!   - A missing file reads as an empty collection
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! For `FileStore`, each record is one 135-byte block: the four fields
//! (name, phone, email, group) NUL-padded to 50/15/50/20 bytes, in order.
//! No header, no version tag, no checksum. Order on disk equals collection
//! order at last save.

use crate::error::Result;
use crate::model::Contact;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Report from the `doctor` operation.
#[derive(Debug, Default)]
pub struct DoctorReport {
    pub whole_records: usize,
    pub trailing_bytes_dropped: usize,
}

/// Abstract interface for snapshot storage.
pub trait SnapshotStore {
    /// Read the full snapshot. A missing backing file is an empty collection.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Overwrite the backing file with a full snapshot.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Verify the backing file and drop trailing garbage.
    fn doctor(&mut self) -> Result<DoctorReport>;

    /// Path of the backing file (for file-based stores).
    fn data_path(&self) -> Option<PathBuf>;
}
