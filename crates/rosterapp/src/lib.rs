//! # Roster Architecture
//!
//! Rosterapp is a **UI-agnostic student roster library**. The `roster` binary is
//! one client of it; a GUI or a web backend could be another.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (the `roster` CLI, or any other UI)                   │
//! │  - Collects form input, prints results, owns exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, view.rs)                                │
//! │  - Owns the Roster and the current search/sort view         │
//! │  - Normalizes inputs (display indexes → RecordIds)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, mutation, listing, export                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster + Storage (roster.rs, store/)                       │
//! │  - Ordered record collection, persisted on every mutation   │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments and returns
//! `Result<CmdResult>`. It never prints and never exits the process. The one
//! piece of output it does produce, the text report, is returned as a `String`
//! (and written to a file only when asked).
//!
//! ## Module Overview
//!
//! - [`api`]: The facade hosts talk to
//! - [`view`]: Current search term and sort selection
//! - [`commands`]: Business logic for each operation
//! - [`roster`]: The ordered, persisted record collection
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Record`, `RecordId`, `EducationType`
//! - [`validation`]: Form checks and grade parsing
//! - [`query`]: Search matching and sort keys
//! - [`export`]: The plain-text report format
//! - [`index`]: Display indexes
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod index;
pub mod model;
pub mod query;
pub mod roster;
pub mod store;
pub mod validation;
pub mod view;
