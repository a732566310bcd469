//! Delegate-level errors

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by the external tool delegates.
#[derive(Error, Debug)]
pub enum DelegateError {
    /// The template artifact could not be written.
    #[error("cannot create {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Repository metadata lookup failed.
    #[error("{message}")]
    Git {
        message: String,
        exit_code: Option<i32>,
    },
}

/// Result type for delegate operations.
pub type DelegateResult<T> = Result<T, DelegateError>;

impl DelegateError {
    /// Build a CreateOutput error for `path`.
    pub fn create_output(path: &Path, source: std::io::Error) -> Self {
        Self::CreateOutput {
            path: path.to_path_buf(),
            source,
        }
    }
}
