use super::{decode, encode, RecordStore};
use crate::error::{Result, RosterError};
use crate::model::Record;
use std::cell::{Cell, RefCell};

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the value's lifetime.
///
/// Uses `RefCell` for interior mutability since the roster is single-threaded.
#[derive(Default)]
pub struct InMemoryStore {
    slot: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the slot with raw serialized data, as if written by an earlier session.
    pub fn with_data(data: impl Into<String>) -> Self {
        let store = Self::new();
        *store.slot.borrow_mut() = Some(data.into());
        store
    }

    /// The serialized slot, if anything has been written.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of successful flushes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }
}

impl RecordStore for InMemoryStore {
    fn load_records(&self) -> Result<Vec<Record>> {
        match self.slot.borrow().as_deref() {
            Some(data) => decode(data),
            None => Ok(Vec::new()),
        }
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(RosterError::Store("Simulated write error".to_string()));
        }
        *self.slot.borrow_mut() = Some(encode(records)?);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::fixtures::fields;
    use crate::roster::Roster;

    pub struct RosterFixture {
        pub roster: Roster<InMemoryStore>,
    }

    impl Default for RosterFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RosterFixture {
        pub fn new() -> Self {
            Self {
                roster: Roster::load(InMemoryStore::new()).unwrap(),
            }
        }

        /// Adds a record with the given names and a phone unique to its position.
        pub fn with_student(mut self, last: &str, first: &str) -> Self {
            let mut f = fields(last, first);
            f.phone = format!("+3805000000{:02}", self.roster.len());
            self.roster.add(Record::new(f)).unwrap();
            self
        }

        pub fn with_students(mut self, names: &[(&str, &str)]) -> Self {
            for (last, first) in names {
                self = self.with_student(last, first);
            }
            self
        }
    }
}
