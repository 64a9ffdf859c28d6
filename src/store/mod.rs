/// Storage module for student-roster
///
/// Holds the in-memory roster and bridges it to the JSON data file.
/// The store never touches disk; callers save after every mutation.

pub mod models;
pub mod persistence;
pub mod roster;

pub use models::*;
pub use persistence::{LoadStatus, Loaded, RosterFile, DEFAULT_DATA_FILE};
pub use roster::RecordStore;
