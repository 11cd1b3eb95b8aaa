//! Parameterized rendering of the three state-dependent documents.
//!
//! Each document is a frontmatter block plus a sequence of section fragments
//! picked by form state. Fragments render against a context built once per
//! document, then join with blank lines. Rendering is pure text work; the
//! renderer never touches the filesystem.

use handlebars::Handlebars;
use serde_json::json;

use crate::commands::CommandProfile;
use crate::error::Result;
use crate::form::{ComponentOrganization, FormState, ProjectType};
use crate::templates::sections;

/// Filename of the project-structure document.
pub const PROJECT_STRUCTURE_FILE: &str = "project-structure.mdc";
/// Filename of the development-workflow document.
pub const DEVELOPMENT_WORKFLOW_FILE: &str = "development-workflow.mdc";
/// Filename of the code-quality document.
pub const CODE_QUALITY_FILE: &str = "code-quality.mdc";

/// Renders the parameterized documents for one form-state snapshot.
pub struct Renderer<'a> {
    form: &'a FormState,
    handlebars: Handlebars<'static>,
}

impl<'a> Renderer<'a> {
    /// Create a renderer for the given form state.
    #[must_use]
    pub fn new(form: &'a FormState) -> Self {
        let mut handlebars = Handlebars::new();
        // Rule documents are Markdown; HTML escaping would mangle them.
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { form, handlebars }
    }

    /// Render `project-structure.mdc`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Render`] if a section fragment is malformed.
    pub fn project_structure(&self) -> Result<String> {
        let requirements = match self.form.project_type {
            ProjectType::Single => sections::STRUCTURE_SINGLE,
            ProjectType::Monorepo => sections::STRUCTURE_MONOREPO,
            ProjectType::Microservices => sections::STRUCTURE_MICROSERVICES,
        };
        let tree = match self.form.component_organization {
            ComponentOrganization::TypeBased => sections::TREE_TYPE_BASED,
            ComponentOrganization::FeatureBased => sections::TREE_FEATURE_BASED,
        };
        let context = json!({
            "source_directory": self.form.source_directory,
            "component_naming": self.form.component_naming,
            "file_naming": self.form.file_naming,
            "import_style": self.form.import_style,
        });

        let parts = vec![
            self.render(sections::STRUCTURE_HEADER, &context)?,
            self.render(requirements, &context)?,
            self.render(tree, &context)?,
            self.render(sections::NAMING_CONVENTIONS, &context)?,
        ];
        Ok(assemble_document(
            "Project structure and file organization requirements",
            "",
            true,
            &parts,
        ))
    }

    /// Render `development-workflow.mdc` for a derived command profile.
    ///
    /// # Errors
    /// Returns [`crate::Error::Render`] if a section fragment is malformed.
    pub fn development_workflow(&self, profile: &CommandProfile) -> Result<String> {
        let manager = profile.package_manager;
        let context = json!({
            "package_manager": manager.id(),
            "add_verb": manager.add_verb(),
            "dev_flag": manager.dev_flag(),
            "update_verb": manager.update_verb(),
            "prune_verb": manager.prune_verb(),
            "run_prefix": manager.run_prefix(),
            "bundler": profile.bundler,
        });

        let mut parts = vec![self.render(sections::WORKFLOW_PACKAGES, &context)?];
        if profile.has_typescript {
            parts.push(self.render(sections::WORKFLOW_TYPECHECK, &context)?);
        }
        if profile.has_testing {
            parts.push(self.render(sections::WORKFLOW_TESTING, &context)?);
        }
        if profile.has_linting {
            parts.push(self.render(sections::WORKFLOW_LINTING, &context)?);
        }
        if profile.has_monorepo_tooling {
            parts.push(self.render(sections::WORKFLOW_MONOREPO, &context)?);
        }
        parts.push(self.render(sections::WORKFLOW_BUILD, &context)?);

        Ok(assemble_document(
            "Package manager and day-to-day command reference",
            "",
            false,
            &parts,
        ))
    }

    /// Render `code-quality.mdc`.
    ///
    /// # Errors
    /// Returns [`crate::Error::Render`] if a section fragment is malformed.
    pub fn code_quality(&self) -> Result<String> {
        let rules = self
            .form
            .code_quality
            .iter()
            .map(|rule| format!("- {}", rule.label()))
            .collect::<Vec<_>>()
            .join("\n");
        let context = json!({
            "rules": rules,
            "documentation_level": self.form.documentation_level.label(),
            "documentation_guidance": self.form.documentation_level.guidance(),
            "comment_style": self.form.comment_style.join(", "),
            "readme_requirements": self.form.readme_requirements.join(", "),
        });

        let mut parts = vec![self.render(sections::QUALITY_RULES, &context)?];
        for rule in &self.form.code_quality {
            if let Some(example) = rule.example() {
                parts.push(example.to_string());
            }
        }
        parts.push(self.render(sections::QUALITY_DOCUMENTATION, &context)?);

        Ok(assemble_document(
            "Code quality standards and documentation requirements",
            "",
            true,
            &parts,
        ))
    }

    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let rendered = self.handlebars.render_template(template, context)?;
        // Sections with empty substitutions can end ragged; normalize here so
        // joining stays predictable.
        Ok(rendered.trim_end().to_string())
    }
}

/// Emit the frontmatter block every rule document begins with.
fn frontmatter(description: &str, globs: &str, always_apply: bool) -> String {
    format!("---\ndescription: {description}\nglobs: {globs}\nalwaysApply: {always_apply}\n---\n\n")
}

fn assemble_document(
    description: &str,
    globs: &str,
    always_apply: bool,
    parts: &[String],
) -> String {
    let front = frontmatter(description, globs, always_apply);
    format!("{front}{}\n", parts.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{DocumentationLevel, QualityRule, Technology};

    #[test]
    fn frontmatter_shape_is_exact() {
        let block = frontmatter("Test description", "src/**/*.ts", true);
        assert_eq!(
            block,
            "---\ndescription: Test description\nglobs: src/**/*.ts\nalwaysApply: true\n---\n\n"
        );
    }

    #[test]
    fn empty_globs_still_emit_the_line() {
        let block = frontmatter("Test", "", false);
        assert!(block.contains("\nglobs: \n"));
        assert!(block.contains("\nalwaysApply: false\n"));
    }

    #[test]
    fn structure_document_echoes_the_source_directory() {
        let form = FormState {
            source_directory: "app/src".to_string(),
            ..FormState::default()
        };
        let doc = Renderer::new(&form).project_structure().unwrap();
        assert!(doc.contains("Application code lives in `app/src`."));
        assert!(doc.contains("app/src/\n├── components/"));
    }

    #[test]
    fn structure_document_tracks_project_type() {
        let form = FormState {
            project_type: ProjectType::Monorepo,
            ..FormState::default()
        };
        let doc = Renderer::new(&form).project_structure().unwrap();
        assert!(doc.contains("each package under `packages/`"));
        assert!(!doc.contains("Single application:"));
    }

    #[test]
    fn structure_document_tracks_component_organization() {
        let form = FormState {
            component_organization: ComponentOrganization::FeatureBased,
            ..FormState::default()
        };
        let doc = Renderer::new(&form).project_structure().unwrap();
        assert!(doc.contains("Group files by what they serve:"));
        assert!(!doc.contains("Group files by what they are:"));
    }

    #[test]
    fn empty_free_text_fields_render_without_error() {
        let form = FormState {
            source_directory: String::new(),
            component_naming: String::new(),
            file_naming: String::new(),
            import_style: String::new(),
            ..FormState::default()
        };
        let doc = Renderer::new(&form).project_structure().unwrap();
        assert!(doc.starts_with("---\n"));
        assert!(doc.contains("- Components: \n"));
    }

    #[test]
    fn workflow_spells_pnpm_commands() {
        let profile = CommandProfile::derive(&[Technology::Pnpm, Technology::Typescript]);
        let form = FormState::default();
        let doc = Renderer::new(&form).development_workflow(&profile).unwrap();
        assert!(doc.contains("pnpm install"));
        assert!(doc.contains("pnpm add <package>"));
        assert!(doc.contains("pnpm add -D <package>"));
        assert!(doc.contains("pnpm update"));
        assert!(doc.contains("pnpm prune"));
        assert!(!doc.contains("--save-dev"));
    }

    #[test]
    fn workflow_spells_npm_commands_by_default() {
        let profile = CommandProfile::derive(&[]);
        let form = FormState::default();
        let doc = Renderer::new(&form).development_workflow(&profile).unwrap();
        assert!(doc.contains("npm install <package>"));
        assert!(doc.contains("npm install --save-dev <package>"));
        assert!(doc.contains("npm run dev"));
    }

    #[test]
    fn workflow_sections_appear_only_with_their_tooling() {
        let form = FormState::default();
        let renderer = Renderer::new(&form);

        let bare = renderer
            .development_workflow(&CommandProfile::derive(&[]))
            .unwrap();
        assert!(!bare.contains("## Type Checking"));
        assert!(!bare.contains("## Testing"));
        assert!(!bare.contains("## Linting and Formatting"));
        assert!(!bare.contains("## Monorepo Tasks"));
        assert!(bare.contains("## Package Management"));
        assert!(bare.contains("## Build"));

        let full = renderer
            .development_workflow(&CommandProfile::derive(&[
                Technology::Typescript,
                Technology::Jest,
                Technology::Eslint,
                Technology::Turborepo,
            ]))
            .unwrap();
        assert!(full.contains("## Type Checking"));
        assert!(full.contains("## Testing"));
        assert!(full.contains("## Linting and Formatting"));
        assert!(full.contains("## Monorepo Tasks"));
    }

    #[test]
    fn workflow_section_order_is_fixed() {
        let form = FormState::default();
        let profile = CommandProfile::derive(&[
            Technology::Typescript,
            Technology::Vitest,
            Technology::Prettier,
            Technology::Nx,
        ]);
        let doc = Renderer::new(&form).development_workflow(&profile).unwrap();
        let positions: Vec<usize> = [
            "## Package Management",
            "## Type Checking",
            "## Testing",
            "## Linting and Formatting",
            "## Monorepo Tasks",
            "## Build",
        ]
        .iter()
        .map(|heading| doc.find(heading).unwrap())
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn workflow_names_webpack_when_selected() {
        let form = FormState::default();
        let doc = Renderer::new(&form)
            .development_workflow(&CommandProfile::derive(&[Technology::Webpack]))
            .unwrap();
        assert!(doc.contains("come from webpack"));
        assert!(!doc.contains("vite"));
    }

    #[test]
    fn quality_document_lists_rules_and_toggles_examples() {
        let form = FormState {
            code_quality: vec![
                QualityRule::NoExplicitAny,
                QualityRule::StrictTypescript,
                QualityRule::Custom("Ban default exports".to_string()),
            ],
            ..FormState::default()
        };
        let doc = Renderer::new(&form).code_quality().unwrap();
        assert!(doc.contains("- No `any` types allowed"));
        assert!(doc.contains("- Strict TypeScript mode"));
        assert!(doc.contains("- Ban default exports"));
        assert!(doc.contains("### Good: Proper typing"));
        // Only the no-any flag carries an example here.
        assert!(!doc.contains("### Good: `const` by default"));
    }

    #[test]
    fn removing_a_flag_removes_only_its_example() {
        let mut form = FormState {
            code_quality: vec![QualityRule::NoExplicitAny, QualityRule::PreferConst],
            ..FormState::default()
        };
        let both = Renderer::new(&form).code_quality().unwrap();
        assert!(both.contains("### Good: Proper typing"));
        assert!(both.contains("### Good: `const` by default"));

        form.code_quality = vec![QualityRule::PreferConst];
        let one = Renderer::new(&form).code_quality().unwrap();
        assert!(!one.contains("### Good: Proper typing"));
        assert!(one.contains("### Good: `const` by default"));
    }

    #[test]
    fn quality_document_echoes_documentation_settings() {
        let form = FormState {
            documentation_level: DocumentationLevel::Comprehensive,
            comment_style: vec![
                "JSDoc on exported functions".to_string(),
                "Explain why, not what".to_string(),
            ],
            readme_requirements: vec!["Setup instructions".to_string()],
            ..FormState::default()
        };
        let doc = Renderer::new(&form).code_quality().unwrap();
        assert!(doc.contains("Documentation level: **Comprehensive**."));
        assert!(doc.contains("- Comment style: JSDoc on exported functions, Explain why, not what"));
        assert!(doc.contains("- README must cover: Setup instructions"));
    }

    #[test]
    fn empty_quality_selection_still_renders_the_document() {
        let form = FormState::default();
        let doc = Renderer::new(&form).code_quality().unwrap();
        assert!(doc.starts_with("---\n"));
        assert!(doc.contains("## Quality Rules"));
        assert!(doc.contains("## Documentation"));
        assert!(!doc.contains("### Good:"));
    }
}
