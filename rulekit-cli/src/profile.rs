//! TOML profiles for non-interactive generation.
//!
//! A profile records the same answers the wizard collects, keyed by the
//! stable identifiers the engine's enums expose. Unknown identifiers are
//! logged and dropped rather than failing the run, so a profile written for
//! a newer rulekit still generates what this version understands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use rulekit::{
    ComponentOrganization, DocumentationLevel, FormState, Framework, ProjectType, QualityRule,
    TaskType, Technology,
};

/// On-disk profile schema. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Framework identifier, for example `react` or `nextjs`.
    pub framework: Option<String>,
    /// Technology identifiers, for example `typescript` or `pnpm`.
    pub additional_tech: Vec<String>,
    /// Project layout identifier: `single`, `monorepo` or `microservices`.
    pub project_type: Option<String>,
    /// Directory application code lives in.
    pub source_directory: Option<String>,
    /// `type-based` or `feature-based`.
    pub component_organization: Option<String>,
    /// Component naming convention, echoed verbatim.
    pub component_naming: Option<String>,
    /// File naming convention, echoed verbatim.
    pub file_naming: Option<String>,
    /// Import style, echoed verbatim.
    pub import_style: Option<String>,
    /// Quality rules; exact known labels toggle their example blocks.
    pub code_quality: Vec<String>,
    /// `minimal`, `standard` or `comprehensive`.
    pub documentation_level: Option<String>,
    /// Commenting conventions, echoed verbatim.
    pub comment_style: Vec<String>,
    /// README sections, echoed verbatim.
    pub readme_requirements: Vec<String>,
    /// Task type identifiers: `features`, `bugs`, `testing`.
    pub task_types: Vec<String>,
}

impl Profile {
    /// Load a profile from a TOML file.
    ///
    /// # Errors
    /// Fails when the file cannot be read or is not valid profile TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse profile: {}", path.display()))
    }

    /// Convert into engine form state, dropping unknown identifiers.
    #[must_use]
    pub fn into_form_state(self) -> FormState {
        let mut form = FormState::default();

        if let Some(id) = self.framework {
            form.framework = Framework::parse(&id);
            if form.framework.is_none() {
                warn!(%id, "unknown framework in profile, ignoring");
            }
        }
        for id in self.additional_tech {
            match Technology::parse(&id) {
                Some(tech) => {
                    if !form.additional_tech.contains(&tech) {
                        form.additional_tech.push(tech);
                    }
                }
                None => warn!(%id, "unknown technology in profile, ignoring"),
            }
        }
        if let Some(id) = self.project_type {
            match ProjectType::parse(&id) {
                Some(project_type) => form.project_type = project_type,
                None => warn!(%id, "unknown project type in profile, ignoring"),
            }
        }
        if let Some(dir) = self.source_directory {
            form.source_directory = dir;
        }
        if let Some(id) = self.component_organization {
            match ComponentOrganization::parse(&id) {
                Some(organization) => form.component_organization = organization,
                None => warn!(%id, "unknown component organization in profile, ignoring"),
            }
        }
        if let Some(naming) = self.component_naming {
            form.component_naming = naming;
        }
        if let Some(naming) = self.file_naming {
            form.file_naming = naming;
        }
        if let Some(import_style) = self.import_style {
            form.import_style = import_style;
        }
        form.code_quality = self
            .code_quality
            .iter()
            .map(|text| QualityRule::parse(text))
            .collect();
        if let Some(id) = self.documentation_level {
            match DocumentationLevel::parse(&id) {
                Some(level) => form.documentation_level = level,
                None => warn!(%id, "unknown documentation level in profile, ignoring"),
            }
        }
        form.comment_style = self.comment_style;
        form.readme_requirements = self.readme_requirements;
        for id in self.task_types {
            match TaskType::parse(&id) {
                Some(task) => {
                    if !form.task_types.contains(&task) {
                        form.task_types.push(task);
                    }
                }
                None => warn!(%id, "unknown task type in profile, ignoring"),
            }
        }

        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_profile_parses() {
        let profile: Profile = toml::from_str(
            r#"
framework = "react"
additional_tech = ["typescript", "vitest"]
"#,
        )
        .unwrap();
        let form = profile.into_form_state();
        assert_eq!(form.framework, Some(Framework::React));
        assert_eq!(
            form.additional_tech,
            [Technology::Typescript, Technology::Vitest]
        );
        // Untouched fields keep engine defaults.
        assert_eq!(form.source_directory, "src");
        assert_eq!(form.project_type, ProjectType::Single);
    }

    #[test]
    fn full_profile_round_trips_every_field() {
        let profile: Profile = toml::from_str(
            r#"
framework = "nextjs"
additional_tech = ["typescript", "pnpm", "eslint"]
project_type = "monorepo"
source_directory = "apps/web/src"
component_organization = "feature-based"
component_naming = "PascalCase"
file_naming = "kebab-case"
import_style = "relative within a feature"
code_quality = ["Strict TypeScript mode", "Ban default exports"]
documentation_level = "comprehensive"
comment_style = ["Explain why, not what"]
readme_requirements = ["Setup instructions", "Available scripts"]
task_types = ["testing", "features"]
"#,
        )
        .unwrap();
        let form = profile.into_form_state();
        assert_eq!(form.framework, Some(Framework::NextJs));
        assert_eq!(form.project_type, ProjectType::Monorepo);
        assert_eq!(form.source_directory, "apps/web/src");
        assert_eq!(
            form.component_organization,
            ComponentOrganization::FeatureBased
        );
        assert_eq!(form.documentation_level, DocumentationLevel::Comprehensive);
        assert_eq!(
            form.code_quality,
            [
                QualityRule::StrictTypescript,
                QualityRule::Custom("Ban default exports".to_string())
            ]
        );
        // Form state preserves profile order; the assembler reorders at
        // emission time.
        assert_eq!(form.task_types, [TaskType::Testing, TaskType::Features]);
    }

    #[test]
    fn unknown_identifiers_are_dropped_not_fatal() {
        let profile: Profile = toml::from_str(
            r#"
framework = "svelte"
additional_tech = ["typescript", "grunt"]
project_type = "mainframe"
task_types = ["bugs", "yak-shaving"]
"#,
        )
        .unwrap();
        let form = profile.into_form_state();
        assert_eq!(form.framework, None);
        assert_eq!(form.additional_tech, [Technology::Typescript]);
        assert_eq!(form.project_type, ProjectType::Single);
        assert_eq!(form.task_types, [TaskType::Bugs]);
    }

    #[test]
    fn duplicate_identifiers_collapse() {
        let profile: Profile = toml::from_str(
            r#"
additional_tech = ["pnpm", "pnpm", "typescript"]
task_types = ["bugs", "bugs"]
"#,
        )
        .unwrap();
        let form = profile.into_form_state();
        assert_eq!(
            form.additional_tech,
            [Technology::Pnpm, Technology::Typescript]
        );
        assert_eq!(form.task_types, [TaskType::Bugs]);
    }

    #[test]
    fn unknown_profile_keys_fail_loudly() {
        let result: std::result::Result<Profile, _> = toml::from_str("frameworks = \"react\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = Profile::load(&missing).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
