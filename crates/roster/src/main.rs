//! # Roster CLI
//!
//! The `roster` binary is a thin terminal client for the `rosterapp` library.
//! This file only invokes `cli::run()` and turns an error into an exit code;
//! everything else lives in `src/cli/`.
//!
//! ## Workspace Structure
//!
//! - `crates/rosterapp/`: core library, UI-agnostic
//! - `crates/roster/`: this CLI, depends on `rosterapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/roster/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Per-command handlers (handlers.rs)                       │
//! │  - Terminal output (render.rs)                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/rosterapp/src/api.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each invocation is one session: the roster is loaded from the data
//! directory, the command runs, and every mutation is already on disk by the
//! time the process exits.
//!
//! ## Testing Approach
//!
//! Library behavior is tested in `rosterapp`. Here, `tests/` drives the real
//! binary with `assert_cmd` against a temporary `ROSTER_HOME`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
