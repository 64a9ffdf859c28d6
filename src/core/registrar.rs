// The four roster operations: add, view, search, delete
//
// Owns the store and the data file. Every successful mutation is saved
// to disk before the call returns (write-through, never batched).

use crate::error::{RosterError, Result};
use crate::store::{LoadStatus, RecordStore, Roster, RosterFile, Student};

/// What happened to a delete request that found its student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub struct Registrar {
    store: RecordStore,
    file: RosterFile,
}

impl Registrar {
    pub fn new(store: RecordStore, file: RosterFile) -> Self {
        Self { store, file }
    }

    /// Load the data file and build a registrar around it.
    ///
    /// Missing or unreadable-as-JSON files give an empty roster; the status
    /// says which. Only real read failures are errors.
    pub fn open(file: RosterFile) -> Result<(Self, LoadStatus)> {
        let loaded = file.load()?;
        let store = RecordStore::from_roster(loaded.roster);
        Ok((Self::new(store, file), loaded.status))
    }

    // Duplicate ID wins over empty fields, then all three must be non-empty.
    pub fn add(&mut self, id: &str, name: &str, grade: &str) -> Result<()> {
        let (id, name, grade) = (id.trim(), name.trim(), grade.trim());

        if self.store.exists(id) {
            return Err(RosterError::DuplicateKey(id.to_string()));
        }

        if id.is_empty() || name.is_empty() || grade.is_empty() {
            return Err(RosterError::Validation);
        }

        self.store.insert(id, Student::new(name, grade))?;
        log::debug!("Added student {}", id);

        self.persist()
    }

    /// Everything, for the table view. Read-only, never saves.
    pub fn view(&self) -> &Roster {
        self.store.all()
    }

    /// Exact, case-sensitive lookup
    pub fn search(&self, id: &str) -> Result<&Student> {
        self.store.get(id.trim())
    }

    /// Delete after asking `confirm`.
    ///
    /// `confirm` is only called when the student exists. A `false` answer
    /// leaves both the roster and the file alone.
    pub fn delete<F>(&mut self, id: &str, confirm: F) -> Result<DeleteOutcome>
    where
        F: FnOnce(&str) -> Result<bool>,
    {
        let id = id.trim();

        if !self.store.exists(id) {
            return Err(RosterError::NotFound(id.to_string()));
        }

        if !confirm(id)? {
            log::debug!("Delete of student {} cancelled", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        self.store.remove(id)?;
        log::debug!("Deleted student {}", id);

        self.persist()?;
        Ok(DeleteOutcome::Deleted)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn file(&self) -> &RosterFile {
        &self.file
    }

    fn persist(&self) -> Result<()> {
        self.file.save(self.store.all())
    }
}

/// "y" in any case, surrounding spaces ignored. Nothing else counts.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
