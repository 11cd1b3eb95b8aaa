//! Reading rule documents back from disk.
//!
//! Generation never touches the filesystem; this module is the read-only
//! counterpart used to inspect rule files that already exist, for example to
//! check a hand-edited file still has the shape editors expect.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{Error, Result};

/// Parsed frontmatter of a rule document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// One-line summary of what the rule covers.
    pub description: String,
    /// Comma-separated path patterns, possibly empty.
    pub globs: String,
    /// Whether the rule applies regardless of the open file.
    pub always_apply: bool,
}

/// A rule document loaded from disk.
#[derive(Debug, Clone)]
pub struct LoadedRule {
    /// Where the document was read from.
    pub path: PathBuf,
    /// The parsed frontmatter block.
    pub frontmatter: Frontmatter,
    /// Markdown body after the frontmatter.
    pub body: String,
}

/// Read and parse one rule file.
///
/// # Errors
/// [`Error::Read`] if the file cannot be read, [`Error::Frontmatter`] if it
/// does not open with a well-formed frontmatter block. A failed parse never
/// yields a partial document.
pub fn load_rule(path: &Path) -> Result<LoadedRule> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (frontmatter, body) = parse_document(&text).map_err(|reason| Error::Frontmatter {
        path: path.to_path_buf(),
        reason,
    })?;
    trace!(path = %path.display(), "loaded rule file");
    Ok(LoadedRule {
        path: path.to_path_buf(),
        frontmatter,
        body,
    })
}

/// Split rule-document text into frontmatter and body.
///
/// The text must open with a `---` line, carry `description:`, `globs:` and
/// `alwaysApply:` entries, and close the block with a second `---` line.
/// `globs` may be absent or empty; the other two entries are required.
///
/// # Errors
/// Describes the first malformation found. The error text is the `reason`
/// carried by [`Error::Frontmatter`].
pub fn parse_document(text: &str) -> std::result::Result<(Frontmatter, String), String> {
    let rest = text
        .strip_prefix("---\n")
        .ok_or_else(|| "document does not open with a `---` line".to_string())?;
    let (block, body) = if let Some(body) = rest.strip_prefix("---\n") {
        ("", body)
    } else if let Some((block, body)) = rest.split_once("\n---\n") {
        (block, body)
    } else if let Some(block) = rest.strip_suffix("\n---") {
        // Closing delimiter at end of file with no trailing newline.
        (block, "")
    } else {
        return Err("frontmatter block is never closed".to_string());
    };

    let mut description = None;
    let mut globs = None;
    let mut always_apply = None;
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            return Err(format!("frontmatter line without a key: {line:?}"));
        };
        let value = value.strip_prefix(' ').unwrap_or(value);
        match key {
            "description" => description = Some(value.to_string()),
            "globs" => globs = Some(value.to_string()),
            "alwaysApply" => {
                always_apply = Some(match value {
                    "true" => true,
                    "false" => false,
                    other => {
                        return Err(format!("alwaysApply must be true or false, got {other:?}"))
                    }
                });
            }
            other => return Err(format!("unknown frontmatter key {other:?}")),
        }
    }

    let frontmatter = Frontmatter {
        description: description.ok_or_else(|| "missing description".to_string())?,
        globs: globs.unwrap_or_default(),
        always_apply: always_apply.ok_or_else(|| "missing alwaysApply".to_string())?,
    };
    let body = body.strip_prefix('\n').unwrap_or(body).to_string();
    Ok((frontmatter, body))
}
