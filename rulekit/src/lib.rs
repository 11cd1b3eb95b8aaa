//! Deterministic rule-set generation for Cursor rule files.
//!
//! The engine takes one [`FormState`] snapshot, the answers a wizard
//! collected about a project's stack, and produces an ordered set of
//! `.mdc` rule documents ready to be written under `.cursor/rules/`.
//! Generation is pure: no filesystem access, no clock, no randomness, so
//! equal snapshots always yield byte-identical output.
//!
//! ```
//! use rulekit::{generate, FormState, Framework};
//!
//! let form = FormState {
//!     framework: Some(Framework::React),
//!     ..FormState::default()
//! };
//! let documents = generate(&form).unwrap();
//! assert!(documents
//!     .iter()
//!     .any(|doc| doc.filename == "react-best-practices.mdc"));
//! ```
//!
//! [`loader`] is the read-only counterpart: it parses rule files that
//! already exist on disk back into structured form.

pub mod assemble;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod form;
pub mod loader;
pub mod render;
pub mod templates;

pub use assemble::{generate, RuleDocument};
pub use commands::{CommandProfile, PackageManager};
pub use error::{Error, Result};
pub use form::{
    ComponentOrganization, DocumentationLevel, FormState, Framework, ProjectType, QualityRule,
    TaskType, Technology,
};
pub use loader::{load_rule, parse_document, Frontmatter, LoadedRule};
