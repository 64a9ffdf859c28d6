/// Error types for student-roster
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// A required field was empty after trimming
    #[error("ID, Name, and Grade cannot be empty")]
    Validation,

    /// Add on an ID that is already in the roster
    #[error("Duplicate student ID: {0}")]
    DuplicateKey(String),

    /// Search or delete on an ID that isn't there
    #[error("Student not found: {0}")]
    NotFound(String),

    /// Menu input outside 1-5
    #[error("Invalid menu choice: {0}")]
    InvalidChoice(String),

    /// Data file exists but can't be parsed
    #[error("Corrupt data file: {0}")]
    CorruptData(String),

    /// I/O errors (file operations, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for roster operations
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Convert RosterError to the single line shown to the user
    pub fn user_message(&self) -> String {
        match self {
            RosterError::Validation => "ID, Name, and Grade cannot be empty.".to_string(),
            RosterError::DuplicateKey(id) => {
                format!("A student with ID {} already exists.", id)
            }
            RosterError::NotFound(id) => format!("Student with ID {} not found.", id),
            RosterError::InvalidChoice(_) => {
                "Invalid choice. Please enter a number between 1 and 5.".to_string()
            }
            RosterError::CorruptData(_) => {
                "Error reading JSON file. Starting with empty records.".to_string()
            }
            RosterError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            RosterError::Serialization(e) => format!("Data format error: {}", e),
        }
    }

    /// Whether the menu loop can report this and keep going.
    ///
    /// I/O and serialization failures are fatal and end the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RosterError::Validation
                | RosterError::DuplicateKey(_)
                | RosterError::NotFound(_)
                | RosterError::InvalidChoice(_)
                | RosterError::CorruptData(_)
        )
    }
}
