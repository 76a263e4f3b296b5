//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// A pattern that is simply absent from the target is not an error; see
/// `PatchOutcome::NotFound`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// The target file (or its backup) could not be read or written.
    #[from(ignore)]
    #[display("File access error on {}: {}", path.display(), source)]
    FileAccess {
        /// Path that was being accessed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The search pattern failed to compile.
    #[display("Invalid pattern: {_0}")]
    Pattern(regex::Error),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

impl AppError {
    /// Wraps an IO error with the path it occurred on.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::FileAccess { source, .. } => Some(source),
            AppError::Pattern(e) => Some(e),
            AppError::General(_) => None,
        }
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
