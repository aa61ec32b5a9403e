//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every contactz operation, whatever UI drives it (the scripted
//! subcommands and the interactive menu both go through here).
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does not
//! hold business logic, does no terminal I/O, and never formats output.
//!
//! `ContactsApi<S: ContactStore>` is generic over the storage backend:
//! - Production: `ContactsApi<FileStore>`
//! - Testing: `ContactsApi<InMemoryStore>`
//!
//! The store handle (and therefore the data file path) is injected once at
//! construction; nothing in the crate reaches for a global path.

use crate::commands;
use crate::error::Result;
use crate::model::{ContactDraft, ContactUpdate};
use crate::store::ContactStore;

/// The main API facade for contactz operations.
pub struct ContactsApi<S: ContactStore> {
    store: S,
    paths: commands::ContactsPaths,
}

impl<S: ContactStore> ContactsApi<S> {
    pub fn new(store: S, paths: commands::ContactsPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_contact(&mut self, draft: ContactDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_contacts(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn view_contact(&self, id: u32) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn edit_contact(&mut self, id: u32, update: &ContactUpdate) -> Result<commands::CmdResult> {
        commands::edit::run(&mut self.store, id, update)
    }

    pub fn delete_contact(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn next_id(&self) -> Result<u32> {
        commands::helpers::next_id(&self.store)
    }

    pub fn doctor(&mut self, fix: bool) -> Result<commands::CmdResult> {
        commands::doctor::run(&mut self.store, fix)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::ContactsPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ContactsPaths, MessageLevel};
