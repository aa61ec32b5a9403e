//! # Contactz Architecture
//!
//! Contactz is a small contact manager that keeps its records in a flat binary file
//! of fixed-width records. The library holds everything that matters: the record
//! layout, the store, and the operations on it. The binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Subcommands, the interactive menu, terminal output       │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns CmdResult             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - next id, add, find, search, edit, delete, doctor         │
//! │  - Built only on the store primitives                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContactStore trait: load_all, append, replace_all, ...   │
//! │  - FileStore (binary file), InMemoryStore (testing)         │
//! │  - codec: fixed-width record pack/unpack                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns plain Rust values, never writes to
//! stdout/stderr (logging goes through `tracing`), and never exits the process.
//!
//! ## Stateless Operations
//!
//! There is no in-memory model kept between operations. Each one loads the file,
//! computes, and writes back if it needs to. Ids are `max + 1`, so ids freed by a
//! delete are not handed out again.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage trait, implementations, and the record codec
//! - [`model`]: `Contact`, `ContactDraft`, `ContactUpdate`, field capacities
//! - [`config`]: `config.json` handling
//! - [`init`]: Data directory resolution and context wiring
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
