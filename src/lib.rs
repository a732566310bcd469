//! Command line front end for whole-cell modeling tools.
//!
//! The binary resolves a small static command tree (`wc model`, `wc tool
//! kb|lang|sim`, ...) and either prints help text or delegates to a tool
//! implementation. All output is collected into an [`ExecutionResult`] so
//! callers and tests see exit status, stdout, and stderr as plain data.

pub mod cli;
pub mod exitcode;
pub mod infrastructure;
pub mod logging;
pub mod tools;
pub mod util;

pub use cli::{run, ExecutionResult, Outcome};
