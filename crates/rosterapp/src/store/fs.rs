use super::{decode, encode, RecordStore, DEFAULT_SLOT};
use crate::error::{Result, RosterError};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
    slot: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    pub fn with_slot(mut self, slot: &str) -> Self {
        self.slot = slot.to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Path of the JSON file backing the slot.
    pub fn slot_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.slot))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RosterError::Io)?;
        }
        Ok(())
    }
}

impl RecordStore for FileStore {
    fn load_records(&self) -> Result<Vec<Record>> {
        let path = self.slot_path();
        if !path.exists() {
            debug!(path = %path.display(), "slot not found, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(RosterError::Io)?;
        decode(&content)
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        self.ensure_dir()?;
        let content = encode(records)?;

        // Write to a temp file first so the slot is never half written
        let tmp_file = self.root.join(format!(".{}-{}.tmp", self.slot, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(RosterError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, self.slot_path()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(RosterError::Io(e));
        }

        debug!(count = records.len(), slot = %self.slot, "slot written");
        Ok(())
    }
}
