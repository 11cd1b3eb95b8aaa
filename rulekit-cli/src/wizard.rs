//! Interactive prompt flow that fills in a form state.
//!
//! Pure terminal I/O; every answer lands in a [`FormState`] and generation
//! stays in the `rulekit` crate. Prompt order mirrors the order the
//! generated documents reference the answers in.

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use rulekit::{
    ComponentOrganization, DocumentationLevel, FormState, Framework, ProjectType, QualityRule,
    TaskType, Technology,
};

const COMMENT_STYLE_CHOICES: &[&str] = &[
    "JSDoc on exported functions",
    "Explain why, not what",
    "Keep comments current with the code",
    "TODO comments reference an issue",
];

const README_CHOICES: &[&str] = &[
    "Setup instructions",
    "Available scripts",
    "Environment variables",
    "Architecture overview",
    "Deployment notes",
];

/// Walk the full wizard and return the completed form state.
///
/// # Errors
/// Fails when the terminal is not interactive or the user aborts a prompt.
pub fn run() -> Result<FormState> {
    let theme = ColorfulTheme::default();
    let mut form = FormState::default();

    println!("{}", style("Stack").bold().underlined());

    let mut framework_labels: Vec<&str> = Framework::ALL.iter().map(|f| f.label()).collect();
    framework_labels.push("None of these");
    let picked = Select::with_theme(&theme)
        .with_prompt("Primary framework")
        .items(&framework_labels)
        .default(0)
        .interact()?;
    form.framework = Framework::ALL.get(picked).copied();

    let tech_labels: Vec<&str> = Technology::ALL.iter().map(|t| t.label()).collect();
    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Additional technologies (space toggles, enter confirms)")
        .items(&tech_labels)
        .interact()?;
    form.additional_tech = picked.into_iter().map(|i| Technology::ALL[i]).collect();

    println!();
    println!("{}", style("Structure").bold().underlined());

    let type_labels: Vec<&str> = ProjectType::ALL.iter().map(|p| p.label()).collect();
    let picked = Select::with_theme(&theme)
        .with_prompt("Project layout")
        .items(&type_labels)
        .default(0)
        .interact()?;
    form.project_type = ProjectType::ALL[picked];

    form.source_directory = Input::with_theme(&theme)
        .with_prompt("Source directory")
        .default("src".to_string())
        .allow_empty(true)
        .interact_text()?;

    let org_labels: Vec<&str> = ComponentOrganization::ALL.iter().map(|o| o.label()).collect();
    let picked = Select::with_theme(&theme)
        .with_prompt("Component organization")
        .items(&org_labels)
        .default(0)
        .interact()?;
    form.component_organization = ComponentOrganization::ALL[picked];

    form.component_naming = Input::with_theme(&theme)
        .with_prompt("Component naming convention")
        .default("PascalCase".to_string())
        .interact_text()?;
    form.file_naming = Input::with_theme(&theme)
        .with_prompt("File naming convention")
        .default("kebab-case".to_string())
        .interact_text()?;
    form.import_style = Input::with_theme(&theme)
        .with_prompt("Import style")
        .default("absolute imports with an `@/` alias".to_string())
        .interact_text()?;

    println!();
    println!("{}", style("Quality").bold().underlined());

    let known_rules = QualityRule::KNOWN;
    let quality_labels: Vec<&str> = known_rules.iter().map(QualityRule::label).collect();
    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Code quality rules")
        .items(&quality_labels)
        .interact()?;
    form.code_quality = picked
        .into_iter()
        .map(|i| known_rules[i].clone())
        .collect();

    let custom: String = Input::with_theme(&theme)
        .with_prompt("Custom quality rules (comma separated, empty for none)")
        .default(String::new())
        .allow_empty(true)
        .interact_text()?;
    for entry in custom.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        form.code_quality.push(QualityRule::parse(entry));
    }

    let level_labels: Vec<&str> = DocumentationLevel::ALL.iter().map(|l| l.label()).collect();
    let picked = Select::with_theme(&theme)
        .with_prompt("Documentation level")
        .items(&level_labels)
        .default(1)
        .interact()?;
    form.documentation_level = DocumentationLevel::ALL[picked];

    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Comment style")
        .items(COMMENT_STYLE_CHOICES)
        .defaults(&[true, true, false, false])
        .interact()?;
    form.comment_style = picked
        .into_iter()
        .map(|i| COMMENT_STYLE_CHOICES[i].to_string())
        .collect();

    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("README must cover")
        .items(README_CHOICES)
        .defaults(&[true, true, true, false, false])
        .interact()?;
    form.readme_requirements = picked
        .into_iter()
        .map(|i| README_CHOICES[i].to_string())
        .collect();

    println!();
    println!("{}", style("Tasks").bold().underlined());

    let task_labels: Vec<&str> = TaskType::ALL.iter().map(|t| t.label()).collect();
    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Include task workflow rules for")
        .items(&task_labels)
        .defaults(&[true, true, true])
        .interact()?;
    form.task_types = picked.into_iter().map(|i| TaskType::ALL[i]).collect();

    Ok(form)
}
