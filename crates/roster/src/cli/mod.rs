//! # CLI Behavior
//!
//! This is **one possible UI client** for rosterapp, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Data Directory
//!
//! Resolved in this order:
//!
//! 1. `--data-dir <DIR>`
//! 2. `ROSTER_HOME` environment variable
//! 3. The platform data directory (`directories::ProjectDirs`)
//!
//! The directory holds `config.json` and the record slot (`studentGroup.json`
//! unless `slot` is configured otherwise).
//!
//! ## Naked Execution
//!
//! Running `roster` with no subcommand lists the roster.
//!
//! ## Indexes
//!
//! `edit` and `delete` take the index printed by `list`. Indexes are positions in
//! the stored order, so they stay the same whatever `--search` or `--sort` was
//! used to display them. `delete` also accepts ranges such as `2-4`.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup, logging, dispatch
//! - `handlers`: Per-command handlers that call the API
//! - `render`: Tables, reports and colored messages

mod commands;
mod handlers;
mod render;
pub mod setup;

pub use commands::run;
