//! Model definition language delegate
//!
//! Owns the one capability the dispatcher forwards to: creating a template
//! model definition workbook at a caller-supplied path. The workbook's
//! internal format belongs to the modeling library; this delegate only lays
//! out the section scaffold and records provenance in the header.

use std::path::Path;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tracing::{debug, instrument};

use crate::infrastructure::traits::{CommandRunner, FileSystem};
use crate::tools::error::{DelegateError, DelegateResult};
use crate::tools::repo_metadata::{self, RepoMetadata};

/// Sheet scaffold written into every template.
const TEMPLATE_SHEETS: &[(&str, &str)] = &[
    ("Model", "id\tname\tversion"),
    ("Compartments", "id\tname\tinitial volume"),
    ("SpeciesTypes", "id\tname\tstructure"),
    ("Species", "id\tspecies type\tcompartment"),
    ("Reactions", "id\tname\tsubmodel\tparticipants"),
    ("Parameters", "id\tname\tvalue\tunits"),
];

/// Options for template creation.
#[derive(Debug, Clone, Default)]
pub struct TemplateOptions {
    /// Skip the repository metadata lookup for the enclosing checkout.
    pub ignore_repo_metadata: bool,
}

/// Delegate for `wc tool lang` operations.
pub struct LangTool {
    fs: Arc<dyn FileSystem>,
    runner: Arc<dyn CommandRunner>,
}

impl LangTool {
    pub fn new(fs: Arc<dyn FileSystem>, runner: Arc<dyn CommandRunner>) -> Self {
        Self { fs, runner }
    }

    /// Create a template model definition workbook at `path`.
    ///
    /// Unless `ignore_repo_metadata` is set, the directory that will contain
    /// `path` must be inside a git checkout with an origin remote; its URL,
    /// branch and revision are stamped into the template header.
    #[instrument(skip(self))]
    pub fn create_template(&self, path: &Path, options: &TemplateOptions) -> DelegateResult<()> {
        let metadata = if options.ignore_repo_metadata {
            None
        } else {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            Some(repo_metadata::collect(dir, self.runner.as_ref())?)
        };

        if self.fs.exists(path) {
            debug!("overwriting existing template at {}", path.display());
        }

        self.fs
            .ensure_parent(path)
            .map_err(|e| DelegateError::create_output(path, e))?;
        self.fs
            .write(path, &render_template(metadata.as_ref()))
            .map_err(|e| DelegateError::create_output(path, e))?;

        debug!("template written to {}", path.display());
        Ok(())
    }
}

/// Render the template scaffold, optionally stamped with provenance.
fn render_template(metadata: Option<&RepoMetadata>) -> String {
    let mut out = String::from("!!wc-model-template\n");
    out.push_str(&format!(
        "!created: {}\n",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    ));

    if let Some(meta) = metadata {
        out.push_str(&format!("!repository-url: {}\n", meta.url));
        out.push_str(&format!("!repository-branch: {}\n", meta.branch));
        out.push_str(&format!("!repository-revision: {}\n", meta.revision));
    }

    for (sheet, columns) in TEMPLATE_SHEETS {
        out.push('\n');
        out.push_str(&format!("!!{sheet}\n"));
        out.push_str(columns);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_metadata_when_rendering_then_header_has_only_timestamp() {
        let content = render_template(None);

        assert!(content.starts_with("!!wc-model-template\n!created: "));
        assert!(!content.contains("!repository-url"));
        assert!(content.contains("!!Model\nid\tname\tversion\n"));
        assert!(content.contains("!!Parameters\n"));
    }

    #[test]
    fn given_metadata_when_rendering_then_header_stamps_provenance() {
        let meta = RepoMetadata {
            url: "git@github.com:example/model.git".to_string(),
            branch: "main".to_string(),
            revision: "abc123".to_string(),
        };

        let content = render_template(Some(&meta));

        assert!(content.contains("!repository-url: git@github.com:example/model.git\n"));
        assert!(content.contains("!repository-branch: main\n"));
        assert!(content.contains("!repository-revision: abc123\n"));
    }
}
