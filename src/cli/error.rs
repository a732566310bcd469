//! CLI-level errors (wraps delegate errors)

use thiserror::Error;

use crate::tools::DelegateError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Delegate(#[from] DelegateError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Delegate(e) => match e {
                DelegateError::CreateOutput { .. } => crate::exitcode::CANTCREAT,
                DelegateError::Git { .. } => crate::exitcode::SOFTWARE,
            },
        }
    }
}
