//! The `check` command: validate rule files already on disk.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use console::style;

use rulekit::load_rule;

/// Check that rule files open with a well-formed frontmatter block.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rule files to check
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl CheckCommand {
    /// Execute the command.
    ///
    /// # Errors
    /// Fails when any file cannot be read or has malformed frontmatter, after
    /// reporting every file's result.
    pub fn execute(&self) -> Result<()> {
        let mut failures = 0usize;
        for path in &self.files {
            match load_rule(path) {
                Ok(rule) => {
                    let scope = if rule.frontmatter.always_apply {
                        "always applies".to_string()
                    } else if rule.frontmatter.globs.is_empty() {
                        "on demand".to_string()
                    } else {
                        format!("globs: {}", rule.frontmatter.globs)
                    };
                    println!(
                        "  {} {} {}",
                        style("✓").green().bold(),
                        path.display(),
                        style(format!("({scope})")).dim()
                    );
                }
                Err(err) => {
                    failures += 1;
                    println!("  {} {err}", style("✗").red().bold());
                }
            }
        }

        if failures > 0 {
            bail!("{failures} of {} file(s) failed the check", self.files.len());
        }
        println!(
            "{} {} file(s) checked",
            style("Done.").green().bold(),
            self.files.len()
        );
        Ok(())
    }
}
