//! Repository metadata lookup for template provenance
//!
//! Model repositories live in git checkouts. When a template is created
//! inside one, its header records where the checkout points so the artifact
//! can be traced back to its repository.

use std::path::Path;

use tracing::{debug, instrument};

use crate::infrastructure::traits::CommandRunner;
use crate::tools::error::{DelegateError, DelegateResult};

/// Provenance of the enclosing model repository checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoMetadata {
    /// Remote origin URL.
    pub url: String,
    /// Checked-out branch name ("HEAD" when detached).
    pub branch: String,
    /// Commit hash of HEAD.
    pub revision: String,
}

/// Collect repository metadata for the checkout containing `dir`.
#[instrument(skip(runner))]
pub fn collect(dir: &Path, runner: &dyn CommandRunner) -> DelegateResult<RepoMetadata> {
    let url = git_value(dir, runner, &["config", "--get", "remote.origin.url"])?;
    let branch = git_value(dir, runner, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    let revision = git_value(dir, runner, &["rev-parse", "HEAD"])?;
    debug!("repository metadata: {} @ {} ({})", url, branch, revision);

    Ok(RepoMetadata {
        url,
        branch,
        revision,
    })
}

/// Run one git query under `dir` and return its trimmed stdout.
fn git_value(dir: &Path, runner: &dyn CommandRunner, args: &[&str]) -> DelegateResult<String> {
    let dir_str = dir.to_string_lossy().into_owned();
    let mut full_args: Vec<&str> = vec!["-C", dir_str.as_str()];
    full_args.extend_from_slice(args);

    let output = runner
        .run("git", &full_args)
        .map_err(|e| DelegateError::Git {
            message: format!("cannot run git: {e}"),
            exit_code: None,
        })?;

    if !output.success() {
        let stderr = output.stderr_text();
        let detail = if stderr.is_empty() {
            match output.status_code {
                Some(code) => format!("exit status {code}"),
                None => "terminated by signal".to_string(),
            }
        } else {
            stderr
        };
        return Err(DelegateError::Git {
            message: format!("git {} failed: {}", args.join(" "), detail),
            exit_code: output.status_code,
        });
    }

    Ok(output.stdout_text())
}
