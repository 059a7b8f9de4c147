use serde_json::{json, Value};

use crate::{
    context::TestContext,
    error::TestError,
    factory::{GuildFactory, StudentFactory},
};

const GRID_SIZE: usize = 26;

/// Builder for creating test contexts with roster and guild registry files.
///
/// Students are filed into the 26x26 roster grid under their own initials
/// unless placed explicitly with `with_student_at()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_student(StudentFactory::new().initials("J", "S"))
///     .with_guild(GuildFactory::new().guild_id(42))
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Students with their grid cell.
    students: Vec<((usize, usize), Value)>,

    /// Guild entries, `None` leaves the registry file absent.
    guilds: Option<Vec<Value>>,

    /// Raw roster document, overrides `students` when set.
    raw_roster: Option<String>,

    /// Raw registry document, overrides `guilds` when set.
    raw_guilds: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with an empty roster and no guild file.
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            guilds: None,
            raw_roster: None,
            raw_guilds: None,
        }
    }

    /// Adds a student to the roster under its own initials.
    ///
    /// Students whose initials are not uppercase A-Z are filed under `[0][0]`.
    pub fn with_student(mut self, student: StudentFactory) -> Self {
        let cell = student.cell().unwrap_or((0, 0));
        self.students.push((cell, student.build()));
        self
    }

    /// Adds a student to an explicit roster cell, regardless of its initials.
    pub fn with_student_at(mut self, row: usize, column: usize, student: StudentFactory) -> Self {
        self.students.push(((row, column), student.build()));
        self
    }

    /// Adds a guild entry to the registry file.
    pub fn with_guild(mut self, guild: GuildFactory) -> Self {
        self.guilds.get_or_insert_with(Vec::new).push(guild.build());
        self
    }

    /// Writes an empty guild registry file.
    pub fn with_empty_guild_file(mut self) -> Self {
        self.guilds.get_or_insert_with(Vec::new);
        self
    }

    /// Writes `content` verbatim as the roster file.
    pub fn with_raw_roster(mut self, content: impl Into<String>) -> Self {
        self.raw_roster = Some(content.into());
        self
    }

    /// Writes `content` verbatim as the guild registry file.
    pub fn with_raw_guilds(mut self, content: impl Into<String>) -> Self {
        self.raw_guilds = Some(content.into());
        self
    }

    /// Builds the test context, writing the configured files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Temporary directory with the files in place
    /// - `Err(TestError)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let dir = tempfile::tempdir()?;
        let roster_path = dir.path().join("students.json");
        let guilds_path = dir.path().join("guilds.json");

        let roster = match self.raw_roster {
            Some(raw) => raw,
            None => {
                let mut grid = vec![vec![Vec::<Value>::new(); GRID_SIZE]; GRID_SIZE];
                for ((row, column), student) in self.students {
                    grid[row][column].push(student);
                }
                serde_json::to_string(&json!({ "students": grid }))?
            }
        };
        std::fs::write(&roster_path, roster)?;

        let guilds = match (self.raw_guilds, self.guilds) {
            (Some(raw), _) => Some(raw),
            (None, Some(guilds)) => Some(serde_json::to_string(&json!({ "guilds": guilds }))?),
            (None, None) => None,
        };
        if let Some(guilds) = guilds {
            std::fs::write(&guilds_path, guilds)?;
        }

        Ok(TestContext {
            dir,
            roster_path,
            guilds_path,
        })
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
