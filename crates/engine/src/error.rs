use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{} is not a valid directory.", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("Cannot locate the running executable: {0}")]
    ExecutableLocation(#[source] std::io::Error),

    #[error("{source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `offset` is the file position of the first invalid byte.
    #[error("invalid utf-8 sequence at byte {offset}")]
    Decode {
        path: PathBuf,
        offset: u64,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("{source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Failed to list directory '{}': {source}", .path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Path the error is attached to, when there is one.
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::InvalidDirectory(path)
            | Self::FileRead { path, .. }
            | Self::Decode { path, .. }
            | Self::Walk { path, .. }
            | Self::ListDirectory { path, .. } => Some(path),
            Self::ExecutableLocation(_) | Self::Config(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
