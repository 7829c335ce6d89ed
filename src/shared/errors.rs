use thiserror::Error;

/// Caller-recoverable failures from domain mutation operations.
///
/// Every operation that returns one of these leaves the model unchanged, so
/// the UI can show the message and keep going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),

    #[error("{0} name already exists: {1}")]
    DuplicateName(&'static str, String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),
}

/// Failures at the persistence boundary.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read data file: {0}")]
    Read(std::io::Error),

    #[error("Failed to parse data file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write data file: {0}")]
    Write(std::io::Error),

    #[error("Failed to create directory: {0}")]
    Directory(std::io::Error),
}
