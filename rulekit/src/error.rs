//! Error types for the generation engine and the rule loader.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the engine.
///
/// Generation itself only fails on [`Error::Render`]; the loader variants
/// cover reading rule files back from disk.
#[derive(Debug, Error)]
pub enum Error {
    /// A template failed to render.
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    /// A rule file could not be read from disk.
    #[error("failed to read rule file {}", path.display())]
    Read {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A rule file does not start with a well-formed frontmatter block.
    #[error("malformed frontmatter in {}: {reason}", path.display())]
    Frontmatter {
        /// Path of the offending file.
        path: PathBuf,
        /// What exactly is wrong with the block.
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
