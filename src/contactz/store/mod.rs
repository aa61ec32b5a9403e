//! # Storage Layer
//!
//! The [`ContactStore`] trait is the only thing the rest of the crate knows about
//! persistence. It exposes a handful of whole-file primitives; every higher level
//! operation (next id, find, edit, delete) is built from them in `commands/`.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one binary file of fixed-width records
//!   (see [`codec`] for the byte layout)
//! - [`memory::InMemoryStore`]: in-memory storage for testing, no persistence
//!
//! ## Consistency
//!
//! There is no locking and no cache. Each operation reads or writes the whole file
//! (append excepted), and the process assumes it has the file to itself. Between the
//! load and the rewrite of an edit or delete, a second writer would lose its update.

use crate::error::Result;
use crate::model::Contact;

pub mod codec;
pub mod fs;
pub mod memory;

/// Raw state of the store, as seen by `doctor`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StoreReport {
    pub exists: bool,
    pub bytes: u64,
    pub records: usize,
    /// Bytes after the last whole record.
    pub trailing: usize,
}

/// Abstract interface for contact storage.
pub trait ContactStore {
    /// Load every record in stored order. A missing or empty store yields an empty list.
    fn load_all(&self) -> Result<Vec<Contact>>;

    /// Write one record at the end of the store without touching existing data.
    /// Fails with `PartialRecord` if the store ends with a partial record.
    fn append(&mut self, contact: &Contact) -> Result<()>;

    /// Replace the whole store with `contacts`, in order.
    fn replace_all(&mut self, contacts: &[Contact]) -> Result<()>;

    /// Remove the store entirely. Removing a store that does not exist is not an error.
    fn remove(&mut self) -> Result<()>;

    /// Report size and integrity information without decoding failures.
    fn inspect(&self) -> Result<StoreReport>;

    /// Drop a trailing partial record, if any. Returns the number of bytes removed.
    fn truncate_partial(&mut self) -> Result<usize>;
}
