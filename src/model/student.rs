use crate::{
    data::roster::StudentEntry, error::storage::StorageError, model::claim::IdentityClaim,
    util::parse::single_char,
};

/// A student on the roster.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentRecord {
    pub first_initial: char,
    pub last_initial: char,
    pub grade: i64,
    pub teacher_initial: char,
    pub student_number: i64,
}

impl StudentRecord {
    /// Converts a roster file entry into a record.
    ///
    /// Each initial must be exactly one character. Whether the name initials
    /// are A-Z is checked when the record is inserted into the index.
    ///
    /// # Arguments
    /// - `entry` - Raw record as it appears in the roster file
    ///
    /// # Returns
    /// - `Ok(StudentRecord)` - Converted record
    /// - `Err(StorageError::InvalidRecord)` - An initial is empty or longer than one character
    pub fn from_entry(entry: StudentEntry) -> Result<Self, StorageError> {
        let [first, last] = &entry.initials;
        let initial = |field: &str, value: &str| {
            single_char(value).ok_or_else(|| {
                StorageError::InvalidRecord(format!(
                    "student {} has {} '{}', expected a single character",
                    entry.student_number, field, value
                ))
            })
        };

        Ok(Self {
            first_initial: initial("first initial", first)?,
            last_initial: initial("last initial", last)?,
            grade: entry.grade,
            teacher_initial: initial("teacher initial", &entry.teacher_initial)?,
            student_number: entry.student_number,
        })
    }

    /// Whether this record matches an identity claim.
    ///
    /// Compares both initials, the grade, and the teacher initial. The student
    /// number is collected by `/verify` but deliberately not compared here;
    /// the deployed bot has always accepted any number.
    pub fn matches(&self, claim: &IdentityClaim) -> bool {
        self.first_initial == claim.first_initial
            && self.last_initial == claim.last_initial
            && self.grade == claim.grade
            && self.teacher_initial == claim.teacher_initial
    }
}
