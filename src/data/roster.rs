//! Roster file repository.
//!
//! The roster is a JSON document holding a 26x26 grid of student lists,
//! `students[first][last]`, indexed by initials. It is read once at startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    data::json::read_json,
    error::{
        storage::StorageError,
        verification::{InitialPosition, VerificationError},
    },
    model::{
        roster::{initial_index, RosterIndex},
        StudentRecord,
    },
};

/// A student as stored in the roster file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudentEntry {
    /// First and last initial, one character each.
    pub initials: [String; 2],
    pub grade: i64,
    pub teacher_initial: String,
    pub student_number: i64,
}

/// Top-level roster document.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RosterFile {
    #[serde(default)]
    pub students: Vec<Vec<Vec<StudentEntry>>>,
}

/// Repository for the read-only roster file.
pub struct RosterRepository {
    path: PathBuf,
}

impl RosterRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the roster into an index.
    ///
    /// Records are placed by their own initials, not by the cell they occupy in
    /// the file. A record filed under the wrong cell is logged and moved.
    ///
    /// # Returns
    /// - `Ok(RosterIndex)` - Every record indexed
    /// - `Err(StorageError::Io)` - File missing or unreadable
    /// - `Err(StorageError::Json)` - File is not a roster document
    /// - `Err(StorageError::InvalidRecord)` - A record has a malformed or non A-Z initial
    pub async fn load(&self) -> Result<RosterIndex, StorageError> {
        let file: RosterFile = read_json(&self.path).await?;
        let mut records = Vec::new();

        for (row, columns) in file.students.into_iter().enumerate() {
            for (column, entries) in columns.into_iter().enumerate() {
                for entry in entries {
                    let record = StudentRecord::from_entry(entry)?;
                    let invalid = |e: VerificationError| {
                        StorageError::InvalidRecord(format!(
                            "student {}: {}",
                            record.student_number, e
                        ))
                    };

                    let position = (
                        initial_index(record.first_initial, InitialPosition::First)
                            .map_err(invalid)?,
                        initial_index(record.last_initial, InitialPosition::Last)
                            .map_err(invalid)?,
                    );
                    if position != (row, column) {
                        tracing::warn!(
                            "Student {} is filed under [{}][{}] but has initials {}{}, indexing by initials",
                            record.student_number,
                            row,
                            column,
                            record.first_initial,
                            record.last_initial
                        );
                    }

                    records.push(record);
                }
            }
        }

        let index = RosterIndex::from_records(records)
            .map_err(|e| StorageError::InvalidRecord(e.to_string()))?;

        tracing::info!(
            "Loaded {} students from {}",
            index.len(),
            self.path.display()
        );

        Ok(index)
    }
}
