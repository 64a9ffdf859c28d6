// In-memory record store
//
// One record per ID, that's the whole invariant. Saving is somebody else's job.

use crate::error::{RosterError, Result};
use crate::store::models::{Roster, Student};

#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    roster: Roster,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a roster that was just loaded from disk
    pub fn from_roster(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn exists(&self, id: &str) -> bool {
        self.roster.contains_key(id)
    }

    // Refuses to overwrite. Existing record stays exactly as it was.
    pub fn insert(&mut self, id: &str, student: Student) -> Result<()> {
        if self.exists(id) {
            return Err(RosterError::DuplicateKey(id.to_string()));
        }

        self.roster.insert(id.to_string(), student);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&Student> {
        self.roster
            .get(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    pub fn remove(&mut self, id: &str) -> Result<Student> {
        self.roster
            .remove(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))
    }

    /// Full roster for enumeration. Don't rely on the order.
    pub fn all(&self) -> &Roster {
        &self.roster
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}
