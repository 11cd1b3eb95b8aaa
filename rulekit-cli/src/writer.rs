//! Writing generated rule sets under `.cursor/rules/`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use rulekit::RuleDocument;

/// Directory rule files are written to, relative to the project root.
pub const RULES_DIR: &str = ".cursor/rules";

/// Outcome of one write pass.
#[derive(Debug, Default)]
pub struct WriteReport {
    /// Files created or overwritten.
    pub written: Vec<PathBuf>,
    /// Files left untouched because they already exist.
    pub skipped: Vec<PathBuf>,
}

/// Write every document under `root/.cursor/rules/`.
///
/// Existing files are skipped unless `force` is set, so hand-edited rule
/// files survive an accidental re-run.
///
/// # Errors
/// Fails when the rules directory cannot be created or a file cannot be
/// written. Documents before the failure stay on disk.
pub fn write_rules(root: &Path, documents: &[RuleDocument], force: bool) -> Result<WriteReport> {
    let rules_dir = root.join(RULES_DIR);
    fs::create_dir_all(&rules_dir)
        .with_context(|| format!("Failed to create directory: {}", rules_dir.display()))?;

    let mut report = WriteReport::default();
    for doc in documents {
        let path = rules_dir.join(doc.filename);
        if path.exists() && !force {
            debug!(path = %path.display(), "rule file exists, skipping");
            report.skipped.push(path);
            continue;
        }
        fs::write(&path, &doc.content)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        debug!(path = %path.display(), bytes = doc.content.len(), "wrote rule file");
        report.written.push(path);
    }
    Ok(report)
}
