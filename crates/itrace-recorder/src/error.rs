use std::path::PathBuf;

/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error on an already opened sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// File open/create error.
    #[error("{0}: {1}")]
    File(PathBuf, std::io::Error),

    /// Session directory creation error.
    #[error("cannot create session directory {0}: {1}")]
    SessionDirectory(PathBuf, std::io::Error),

    /// Time-related error.
    #[error(transparent)]
    SystemTime(#[from] std::time::SystemTimeError),

    /// Unknown CPU architecture name.
    #[error("unsupported architecture: {0}")]
    UnsupportedArch(String),
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
