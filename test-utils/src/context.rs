use std::path::PathBuf;

use tempfile::TempDir;

/// Test context holding a temporary directory with the roster and guild files.
///
/// The directory and everything in it is deleted when the context is dropped,
/// so keep the context alive for as long as the paths are in use.
pub struct TestContext {
    /// Temporary directory owning the fixture files.
    pub dir: TempDir,

    /// Path of the roster file. Always written.
    pub roster_path: PathBuf,

    /// Path of the guild registry file.
    ///
    /// Only exists on disk if the builder was given guilds or raw guild JSON.
    pub guilds_path: PathBuf,
}

impl TestContext {
    /// Path of an arbitrary file inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Reads the guild registry file back as JSON.
    ///
    /// # Panics
    /// - If the file is missing or not JSON (indicates a failed write under test)
    pub fn read_guilds(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(&self.guilds_path)
            .expect("Failed to read guild registry file");
        serde_json::from_str(&content).expect("Guild registry file is not valid JSON")
    }
}
