//! Error types for sources and publishing

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur while producing records or publishing output.
#[derive(Debug, Clone)]
pub enum PublishError {
    /// Filesystem failure, with the path it happened on
    Io { path: PathBuf, message: String },
    /// No source registered under the requested name
    UnknownSource(String),
    /// Rendering failed outside of IO
    Render(String),
}

impl PublishError {
    pub fn io(path: impl AsRef<Path>, err: std::io::Error) -> Self {
        PublishError::Io {
            path: path.as_ref().to_path_buf(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::Io { path, message } => {
                write!(f, "IO error on {}: {}", path.display(), message)
            }
            PublishError::UnknownSource(name) => write!(f, "Unknown source '{}'", name),
            PublishError::Render(message) => write!(f, "Render error: {}", message),
        }
    }
}

impl std::error::Error for PublishError {}
