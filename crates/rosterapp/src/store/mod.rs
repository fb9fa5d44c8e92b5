//! # Storage Layer
//!
//! The roster persists to a single named **slot** holding the whole record
//! sequence as one serialized JSON array. There is no partial or incremental
//! persistence: every mutation rewrites the slot.
//!
//! Storage is abstracted behind [`RecordStore`] so the roster logic can be tested
//! without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store, `<dir>/<slot>.json`, written atomically
//!   (temp file, then rename).
//! - [`memory::InMemoryStore`]: keeps the serialized slot in memory. Still goes
//!   through JSON so round-trip behavior matches the file store.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── studentGroup.json   # the record slot (JSON array)
//! └── config.json         # RosterConfig
//! ```
//!
//! ## Round Trip
//!
//! What is written must read back as records with identical ids and field values.
//! The stored `averageGrade` is informational only; it is recomputed from `grades`
//! on load (see [`crate::model`]).

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

pub const DEFAULT_SLOT: &str = "studentGroup";

/// Abstract interface for roster persistence.
///
/// Both methods take `&self`: the roster is single-threaded and implementations
/// use interior mutability where they need it.
pub trait RecordStore {
    /// Read the full record sequence. An empty or never-written slot yields no records.
    fn load_records(&self) -> Result<Vec<Record>>;

    /// Replace the slot with the given sequence.
    fn save_records(&self, records: &[Record]) -> Result<()>;
}

pub(crate) fn encode(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub(crate) fn decode(data: &str) -> Result<Vec<Record>> {
    if data.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(data)?)
}
