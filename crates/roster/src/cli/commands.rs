//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Resolve the data directory, load config, open the roster
//! 3. **Dispatch**: Route commands to handlers
//! 4. **Error Handling**: Errors bubble up to `main`, which prints them and exits 1

use super::handlers::{
    handle_add, handle_config, handle_delete, handle_edit, handle_export, handle_list,
};
use super::setup::{Cli, Commands, ViewArgs};
use clap::Parser;
use directories::ProjectDirs;
use rosterapp::api::RosterApi;
use rosterapp::config::RosterConfig;
use rosterapp::error::{Result, RosterError};
use rosterapp::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

pub const HOME_ENV: &str = "ROSTER_HOME";

pub struct AppContext {
    pub api: RosterApi<FileStore>,
    pub data_dir: PathBuf,
    pub config: RosterConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::List { view }) => handle_list(&mut ctx, view),
        Some(Commands::Edit { index, fields }) => handle_edit(&mut ctx, index, fields),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Export {
            view,
            output,
            stdout,
        }) => handle_export(&mut ctx, view, output, stdout),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, ViewArgs::default()),
    }
}

/// Logs go to stderr so they never mix with reports printed on stdout.
/// `RUST_LOG` wins over the default level; `--verbose` wins over both.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("rosterapp=debug,roster=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RosterError::Api("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = RosterConfig::load(&data_dir)?;
    debug!(data_dir = %data_dir.display(), slot = %config.slot, "opening roster");

    let store = FileStore::new(data_dir.clone()).with_slot(&config.slot);
    let api = RosterApi::load(store)?;

    Ok(AppContext {
        api,
        data_dir,
        config,
    })
}
