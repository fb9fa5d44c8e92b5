//! # Record Identifiers: RecordId vs Display Index
//!
//! Records are identified by a [`RecordId`] (a UUID). That is the right technical
//! choice but cumbersome to type, so hosts address records by a **display index**:
//! the 1-based position in the roster's canonical (insertion) order.
//!
//! The index a record gets does not depend on the current view. When a listing is
//! searched or sorted, each entry still carries its canonical index, so
//! `roster delete 2` always targets the same record regardless of what was shown.
//!
//! ## Implementation
//!
//! - [`index_records`]: pairs records with their canonical display index
//! - [`DisplayRecord`]: a `Record` with its index
//! - [`parse_index_or_range`]: parses user input like `"3"` or `"1-3"`
//!
//! Mapping indexes back to ids happens in the [`crate::api`] module.

use crate::model::{Record, RecordId};
use std::collections::HashMap;

/// A record paired with its canonical display index.
#[derive(Debug, Clone)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: Record,
}

/// Canonical 1-based index of every record, by id.
pub fn index_records(records: &[Record]) -> HashMap<RecordId, usize> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| (r.id(), i + 1))
        .collect()
}

/// Attaches canonical indexes to a derived view (search results, sorted lists).
pub fn display_view(all: &[Record], view: &[&Record]) -> Vec<DisplayRecord> {
    let indexes = index_records(all);
    view.iter()
        .filter_map(|r| {
            indexes.get(&r.id()).map(|index| DisplayRecord {
                index: *index,
                record: (*r).clone(),
            })
        })
        .collect()
}

/// Parses `"3"` into `[3]` and `"1-3"` into `[1, 2, 3]`. Indexes start at 1.
pub fn parse_index_or_range(s: &str) -> Result<Vec<usize>, String> {
    let s = s.trim();
    if let Some((start, end)) = s.split_once('-') {
        let start = parse_index(start)?;
        let end = parse_index(end)?;
        if start > end {
            return Err(format!("Invalid range: {} (start is after end)", s));
        }
        return Ok((start..=end).collect());
    }
    parse_index(s).map(|i| vec![i])
}

fn parse_index(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("Invalid index: {}", s)),
        Ok(n) => Ok(n),
    }
}
