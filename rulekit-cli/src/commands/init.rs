//! The `init` command: interactive wizard plus write-out.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::wizard;
use crate::writer::{self, RULES_DIR};

/// Run the interactive wizard and write the generated rule set.
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Project root to write `.cursor/rules/` under
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Overwrite rule files that already exist
    #[arg(long)]
    force: bool,
}

impl InitCommand {
    /// Execute the command.
    ///
    /// # Errors
    /// Fails when the wizard is aborted, generation fails, or the rule set
    /// cannot be written.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {}",
            style("rulekit").cyan().bold(),
            style("generates Cursor rule files for your stack").dim()
        );
        println!();

        let form = wizard::run()?;
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set spinner style")?,
        );
        spinner.set_message("Generating rule documents...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let documents = rulekit::generate(&form)?;

        spinner.set_message("Writing rule files...");
        let report = writer::write_rules(&self.output, &documents, self.force)?;

        spinner.finish_and_clear();

        for path in &report.written {
            println!("  {} {}", style("✓").green().bold(), path.display());
        }
        for path in &report.skipped {
            println!(
                "  {} {} {}",
                style("-").yellow().bold(),
                path.display(),
                style("(exists, use --force to overwrite)").dim()
            );
        }

        println!();
        println!(
            "{} {} rule file(s) ready in {}",
            style("Done.").green().bold(),
            report.written.len(),
            style(self.output.join(RULES_DIR).display()).cyan()
        );
        println!();
        println!("Next steps:");
        println!("  1. Skim the generated files and delete anything that does not fit");
        println!("  2. Open the project in Cursor; rules load automatically");
        println!("  3. Re-run {} after the stack changes", style("rulekit init --force").cyan());

        Ok(())
    }
}
