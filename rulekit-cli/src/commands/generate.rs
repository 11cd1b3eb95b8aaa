//! The `generate` command: non-interactive generation from flags or a
//! profile.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;
use tracing::warn;

use crate::profile::Profile;
use crate::writer;
use rulekit::{
    ComponentOrganization, DocumentationLevel, FormState, Framework, ProjectType, QualityRule,
    TaskType, Technology,
};

/// Generate a rule set without prompts, from flags or a TOML profile.
///
/// Flags are applied on top of the profile, so a profile can hold the
/// stable answers and a flag can vary one of them per run.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// TOML profile describing the stack
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Framework identifier (react, vue, nextjs, nodejs)
    #[arg(long, value_name = "ID")]
    framework: Option<String>,

    /// Technology identifier, repeatable (see `rulekit list`)
    #[arg(long = "tech", value_name = "ID")]
    tech: Vec<String>,

    /// Task type identifier, repeatable (features, bugs, testing)
    #[arg(long = "task", value_name = "ID")]
    task: Vec<String>,

    /// Project layout (single, monorepo, microservices)
    #[arg(long, value_name = "ID")]
    project_type: Option<String>,

    /// Source directory recorded in the structure rules
    #[arg(long, value_name = "DIR")]
    source_dir: Option<String>,

    /// Component organization (type-based, feature-based)
    #[arg(long, value_name = "ID")]
    organization: Option<String>,

    /// Documentation level (minimal, standard, comprehensive)
    #[arg(long, value_name = "ID")]
    docs_level: Option<String>,

    /// Quality rule, repeatable; known labels toggle their example blocks
    #[arg(long = "quality", value_name = "RULE")]
    quality: Vec<String>,

    /// Print documents to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Project root to write `.cursor/rules/` under
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Overwrite rule files that already exist
    #[arg(long)]
    force: bool,
}

impl GenerateCommand {
    /// Execute the command.
    ///
    /// # Errors
    /// Fails when the profile cannot be loaded, generation fails, or the
    /// rule set cannot be written.
    pub fn execute(&self) -> Result<()> {
        let mut form = match &self.config {
            Some(path) => Profile::load(path)?.into_form_state(),
            None => FormState::default(),
        };
        self.apply_flags(&mut form);

        let documents = rulekit::generate(&form)?;

        if self.stdout {
            for doc in &documents {
                println!("==> {}/{}", writer::RULES_DIR, doc.filename);
                println!("{}", doc.content);
            }
            return Ok(());
        }

        let report = writer::write_rules(&self.output, &documents, self.force)?;
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
        println!(
            "{} {} rule file(s) written",
            style("Done.").green().bold(),
            report.written.len()
        );
        Ok(())
    }

    fn apply_flags(&self, form: &mut FormState) {
        if let Some(id) = &self.framework {
            match Framework::parse(id) {
                Some(framework) => form.framework = Some(framework),
                None => warn_unknown("framework", id),
            }
        }
        for id in &self.tech {
            match Technology::parse(id) {
                Some(tech) => {
                    if !form.additional_tech.contains(&tech) {
                        form.additional_tech.push(tech);
                    }
                }
                None => warn_unknown("technology", id),
            }
        }
        for id in &self.task {
            match TaskType::parse(id) {
                Some(task) => {
                    if !form.task_types.contains(&task) {
                        form.task_types.push(task);
                    }
                }
                None => warn_unknown("task type", id),
            }
        }
        if let Some(id) = &self.project_type {
            match ProjectType::parse(id) {
                Some(project_type) => form.project_type = project_type,
                None => warn_unknown("project type", id),
            }
        }
        if let Some(dir) = &self.source_dir {
            form.source_directory.clone_from(dir);
        }
        if let Some(id) = &self.organization {
            match ComponentOrganization::parse(id) {
                Some(organization) => form.component_organization = organization,
                None => warn_unknown("component organization", id),
            }
        }
        if let Some(id) = &self.docs_level {
            match DocumentationLevel::parse(id) {
                Some(level) => form.documentation_level = level,
                None => warn_unknown("documentation level", id),
            }
        }
        for text in &self.quality {
            form.code_quality.push(QualityRule::parse(text));
        }
    }
}

fn warn_unknown(kind: &str, id: &str) {
    warn!(%id, "unknown {kind} on the command line, ignoring");
    eprintln!(
        "{} unknown {kind} {:?} (ignored; see `rulekit list`)",
        style("warning:").yellow().bold(),
        id
    );
}
