//! Tool delegates: the boundary to the external modeling libraries
//!
//! The dispatcher forwards to these services. Everything behind them
//! (workbook formats, knowledge bases, simulations) is out of scope here.

pub mod error;
pub mod lang;
pub mod repo_metadata;

use std::sync::Arc;

use crate::infrastructure::traits::{CommandRunner, FileSystem, RealCommandRunner, RealFileSystem};
use lang::LangTool;

pub use error::{DelegateError, DelegateResult};

/// Container wiring the tool delegates with their dependencies.
pub struct ToolSet {
    fs: Arc<dyn FileSystem>,
    runner: Arc<dyn CommandRunner>,
}

impl ToolSet {
    /// Create a tool set with real implementations.
    pub fn new() -> Self {
        Self::with_deps(Arc::new(RealFileSystem), Arc::new(RealCommandRunner))
    }

    /// Create a tool set with custom dependencies (for testing).
    pub fn with_deps(fs: Arc<dyn FileSystem>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { fs, runner }
    }

    /// The model definition language delegate.
    pub fn lang(&self) -> LangTool {
        LangTool::new(Arc::clone(&self.fs), Arc::clone(&self.runner))
    }
}

impl Default for ToolSet {
    fn default() -> Self {
        Self::new()
    }
}
