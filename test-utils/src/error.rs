use thiserror::Error;

/// Errors that can occur while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the temporary directory or writing a fixture file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A fixture could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
