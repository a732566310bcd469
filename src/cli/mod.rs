//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, Commands};
pub use commands::{run, run_with_tools};
pub use error::{CliError, CliResult};
pub use output::{Console, ExecutionResult, Outcome};
