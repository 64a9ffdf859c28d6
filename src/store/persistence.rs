/// Whole-file JSON persistence for the roster
///
/// Load once at startup, overwrite the full file after every mutation.
/// There is no atomic rename and no backup of unreadable files.

use crate::error::{RosterError, Result};
use crate::store::models::Roster;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Data file used by the binary, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "students.json";

/// Indent used when writing the data file
const JSON_INDENT: &[u8] = b"    ";

/// How the startup load went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// File parsed, this many records
    Loaded(usize),
    /// No file yet, starting fresh
    NotFound,
    /// File exists but couldn't be parsed. Holds the parser's reason.
    Corrupt(String),
}

/// Result of [`RosterFile::load`]
#[derive(Debug, Clone)]
pub struct Loaded {
    pub roster: Roster,
    pub status: LoadStatus,
}

/// Handle to the roster data file
#[derive(Debug, Clone)]
pub struct RosterFile {
    path: PathBuf,
}

impl RosterFile {
    /// Point at a data file. Nothing is read or created until load/save.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the roster from disk
    ///
    /// # Returns
    /// * `Ok(Loaded)` - With status `Loaded`, `NotFound` or `Corrupt`.
    ///   The last two always carry an empty roster.
    /// * `Err(RosterError::Io)` - If the file exists but can't be read
    pub fn load(&self) -> Result<Loaded> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No data file at {}, starting fresh", self.path.display());
                return Ok(Loaded {
                    roster: Roster::new(),
                    status: LoadStatus::NotFound,
                });
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<Roster>(&bytes) {
            Ok(roster) => {
                log::info!(
                    "Loaded {} student(s) from {}",
                    roster.len(),
                    self.path.display()
                );
                let count = roster.len();
                Ok(Loaded {
                    roster,
                    status: LoadStatus::Loaded(count),
                })
            }
            Err(e) => {
                // Old content is dropped here; the next save replaces it.
                let err = RosterError::CorruptData(e.to_string());
                log::warn!("{} ({})", err, self.path.display());
                Ok(Loaded {
                    roster: Roster::new(),
                    status: LoadStatus::Corrupt(e.to_string()),
                })
            }
        }
    }

    /// Overwrite the data file with the whole roster
    pub fn save(&self, roster: &Roster) -> Result<()> {
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
        roster.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, buf)?;
        log::info!(
            "Saved {} student(s) to {}",
            roster.len(),
            self.path.display()
        );

        Ok(())
    }

    /// The one line printed at startup for a given load status
    pub fn status_line(&self, status: &LoadStatus) -> String {
        match status {
            LoadStatus::Loaded(_) => {
                format!("Data loaded successfully from {}.", self.path.display())
            }
            LoadStatus::NotFound => format!(
                "No previous data file found ({}). Starting fresh.",
                self.path.display()
            ),
            LoadStatus::Corrupt(reason) => {
                RosterError::CorruptData(reason.clone()).user_message()
            }
        }
    }
}
