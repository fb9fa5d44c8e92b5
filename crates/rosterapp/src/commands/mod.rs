//! # Command Layer
//!
//! This module contains the **core business logic** of the roster. Each command
//! lives in its own submodule and implements plain Rust functions over the
//! [`Roster`](crate::roster::Roster) and domain types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where validation meets mutation:
//! - Validate raw input before a record is built or changed
//! - Call the roster, which persists on every mutation
//! - Return structured [`CmdResult`] with affected records and messages
//! - Stay completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Printing**: no stdout, stderr, or terminal concerns
//! - **Argument parsing**: that's the host's job
//! - **Exit codes**: return `Result`, let the caller decide
//! - **Index resolution**: commands take [`RecordId`]s; the API maps display
//!   indexes to ids
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Command tests use
//! `InMemoryStore` and check both the roster state and the `CmdResult`.
//!
//! ## Command Modules
//!
//! - [`create`]: Validate a form and add a record
//! - [`update`]: Validate an edited form and apply it
//! - [`delete`]: Remove records
//! - [`list`]: Search, then sort
//! - [`export`]: Render the text report and optionally write it to disk
//! - [`config`]: Show or change configuration

use crate::config::RosterConfig;
use crate::index::DisplayRecord;
use crate::model::{Record, RecordId};
use crate::query::{SortDirection, SortKey};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod list;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<DisplayRecord>,
    pub report: Option<String>,
    pub report_path: Option<PathBuf>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// What a listing or export shows: an optional search term, then an optional sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub sort: Option<(SortKey, SortDirection)>,
}

impl ListQuery {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn sorted(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = Some((key, direction));
        self
    }
}

pub(crate) fn describe(id: RecordId, record: &Record) -> String {
    format!("{} ({})", record.full_name(), &id.to_string()[..8])
}
