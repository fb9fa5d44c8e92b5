//! # The Roster
//!
//! [`Roster`] is the sole owner of the in-memory record sequence and the sole
//! writer of persisted state. Insertion order is the canonical order; sorting and
//! searching return derived views and never reorder it.
//!
//! Every mutation (`add`, `delete`, `update`) flushes the full sequence to the
//! store. A flush failure is returned to the caller; by then the in-memory change
//! has already happened, so the error means persistence is behind memory.
//!
//! `delete` and `update` on an unknown id are silent no-ops. Callers that need to
//! tell "not found" apart from "applied" check [`Roster::contains`] first.

use crate::error::Result;
use crate::model::{Record, RecordId, RecordPatch};
use crate::query::{matches_term, sort_records, SortDirection, SortKey};
use crate::store::RecordStore;
use crate::validation::{normalize_phone, UniqueContacts};
use tracing::{debug, warn};

pub struct Roster<S: RecordStore> {
    store: S,
    records: Vec<Record>,
}

impl<S: RecordStore> Roster<S> {
    /// Populates the roster from the store's slot.
    pub fn load(store: S) -> Result<Self> {
        let records = store.load_records()?;
        debug!(count = records.len(), "roster loaded");
        Ok(Self { store, records })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn flush(&self) -> Result<()> {
        self.store.save_records(&self.records).inspect_err(|e| {
            warn!(error = %e, "failed to persist roster");
        })
    }

    /// Appends to the canonical sequence. Performs no validation.
    pub fn add(&mut self, record: Record) -> Result<()> {
        debug!(id = %record.id(), "adding record");
        self.records.push(record);
        self.flush()
    }

    /// Removes the record with `id` if present, then flushes.
    pub fn delete(&mut self, id: RecordId) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        debug!(%id, removed = before - self.records.len(), "delete");
        self.flush()
    }

    /// Applies `patch` to the record with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: RecordId, patch: &RecordPatch) -> Result<()> {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            debug!(%id, "update skipped, no such record");
            return Ok(());
        };
        record.apply(patch);
        debug!(%id, "record updated");
        self.flush()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// The canonical sequence, unfiltered and unsorted.
    pub fn get_all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose text fields contain `term`, case-insensitively, in canonical
    /// order. An empty term matches everything.
    pub fn search(&self, term: &str) -> Vec<&Record> {
        if term.is_empty() {
            return self.records.iter().collect();
        }
        let term_lower = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| matches_term(r, &term_lower))
            .collect()
    }

    /// A sorted copy of the canonical sequence.
    pub fn sort(&self, key: &SortKey, direction: SortDirection) -> Vec<&Record> {
        sort_records(&self.records, key, direction)
    }

    pub fn is_email_unique(&self, email: &str, exclude: Option<RecordId>) -> bool {
        let email = email.to_lowercase();
        !self
            .records
            .iter()
            .any(|r| Some(r.id()) != exclude && r.email.to_lowercase() == email)
    }

    pub fn is_phone_unique(&self, phone: &str, exclude: Option<RecordId>) -> bool {
        let phone = normalize_phone(phone);
        !self
            .records
            .iter()
            .any(|r| Some(r.id()) != exclude && normalize_phone(&r.phone) == phone)
    }
}

impl<S: RecordStore> UniqueContacts for Roster<S> {
    fn is_email_unique(&self, email: &str, exclude: Option<RecordId>) -> bool {
        Roster::is_email_unique(self, email, exclude)
    }

    fn is_phone_unique(&self, phone: &str, exclude: Option<RecordId>) -> bool {
        Roster::is_phone_unique(self, phone, exclude)
    }
}
