use std::path::PathBuf;

/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// File read error.
    #[error("{0}: {1}")]
    File(PathBuf, std::io::Error),

    /// System call error.
    #[cfg(target_os = "linux")]
    #[error("os error: {0}")]
    Os(#[from] nix::Error),

    /// Memory read returning less bytes than requested.
    #[error("memory read {0} bytes instead of {1}")]
    PartialMemOp(usize, usize),

    /// Malformed line in a `/proc/<pid>/maps` file.
    #[error("invalid memory map line: {0:?}")]
    MapsLine(String),
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
