//! Library surface of the rulekit CLI.
//!
//! The binary in `main.rs` is a thin clap dispatcher; everything it calls
//! lives here so integration tests can drive the same code paths.

pub mod commands;
pub mod profile;
pub mod wizard;
pub mod writer;

pub use profile::Profile;
pub use writer::{write_rules, WriteReport, RULES_DIR};
