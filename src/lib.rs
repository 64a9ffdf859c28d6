/// student-roster library
///
/// Keyed student records, whole-file JSON persistence and a text menu.

pub mod console;
pub mod core;
pub mod error;
pub mod store;

// Re-exports for convenience
pub use error::{RosterError, Result};
pub use store::{RecordStore, RosterFile};
