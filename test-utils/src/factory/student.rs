//! Roster student factory.

use serde_json::{json, Value};

/// Factory for roster students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::StudentFactory;
///
/// let student = StudentFactory::new()
///     .initials("J", "S")
///     .grade(9)
///     .teacher_initial("M")
///     .build();
/// ```
pub struct StudentFactory {
    first_initial: String,
    last_initial: String,
    grade: i64,
    teacher_initial: String,
    student_number: i64,
}

impl StudentFactory {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - initials: `"J"`, `"S"`
    /// - grade: `9`
    /// - teacher_initial: `"M"`
    /// - student_number: `123456`
    pub fn new() -> Self {
        Self {
            first_initial: "J".to_string(),
            last_initial: "S".to_string(),
            grade: 9,
            teacher_initial: "M".to_string(),
            student_number: 123456,
        }
    }

    pub fn initials(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_initial = first.into();
        self.last_initial = last.into();
        self
    }

    pub fn grade(mut self, grade: i64) -> Self {
        self.grade = grade;
        self
    }

    pub fn teacher_initial(mut self, teacher_initial: impl Into<String>) -> Self {
        self.teacher_initial = teacher_initial.into();
        self
    }

    pub fn student_number(mut self, student_number: i64) -> Self {
        self.student_number = student_number;
        self
    }

    /// Roster grid cell matching the initials, if both are uppercase A-Z.
    pub fn cell(&self) -> Option<(usize, usize)> {
        Some((
            grid_index(&self.first_initial)?,
            grid_index(&self.last_initial)?,
        ))
    }

    /// Builds the roster file record.
    pub fn build(self) -> Value {
        json!({
            "initials": [self.first_initial, self.last_initial],
            "grade": self.grade,
            "teacher_initial": self.teacher_initial,
            "student_number": self.student_number,
        })
    }
}

impl Default for StudentFactory {
    fn default() -> Self {
        Self::new()
    }
}

fn grid_index(initial: &str) -> Option<usize> {
    match initial.as_bytes() {
        [b] if b.is_ascii_uppercase() => Some((b - b'A') as usize),
        _ => None,
    }
}
