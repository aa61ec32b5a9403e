//! # CLI Layer
//!
//! This is **one possible UI client** for contactz, not the application itself.
//! It is the only place that knows about stdin/stdout, exit codes and output
//! formatting. For the overall architecture, see the library docs.
//!
//! ## Two ways in
//!
//! - **Interactive menu** (`contactz` or `contactz menu`): the numbered 1–6 loop.
//!   Bad input is re-prompted; store errors are printed and the loop continues.
//! - **Subcommands** (`add`, `list`, `search`, `view`, `edit`, `delete`, ...):
//!   one operation per invocation, for scripts. Errors exit with status 1.
//!
//! Both call the same `ContactsApi` methods and render the same `CmdResult`s.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup and per-subcommand handlers
//! - `menu`: The interactive loop, generic over its reader and writer
//! - `print`: Output formatting (cards, tables, colored messages)

mod commands;
mod menu;
mod print;
pub mod setup;

pub use commands::run;
