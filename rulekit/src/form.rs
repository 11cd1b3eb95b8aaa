//! Wizard form state and the closed selection catalogs.
//!
//! Every choice the wizard offers is a variant of a closed enum here, so the
//! rest of the engine can match exhaustively instead of comparing display
//! strings. Free-text answers (naming conventions, custom quality rules) stay
//! as strings and are echoed into the generated documents verbatim.

use crate::templates::sections;

/// Supported primary frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    /// React single-page applications.
    React,
    /// Vue 3 single-file components.
    Vue,
    /// Next.js with the App Router.
    NextJs,
    /// Node.js backend services.
    NodeJs,
}

impl Framework {
    /// Every framework, in wizard display order.
    pub const ALL: [Self; 4] = [Self::React, Self::Vue, Self::NextJs, Self::NodeJs];

    /// Parse a stable identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "react" => Some(Self::React),
            "vue" => Some(Self::Vue),
            "nextjs" => Some(Self::NextJs),
            "nodejs" => Some(Self::NodeJs),
            _ => None,
        }
    }

    /// Stable identifier used in profiles and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::NextJs => "nextjs",
            Self::NodeJs => "nodejs",
        }
    }

    /// Human-readable name shown by the wizard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::React => "React",
            Self::Vue => "Vue",
            Self::NextJs => "Next.js",
            Self::NodeJs => "Node.js",
        }
    }
}

/// Additional technologies the wizard offers alongside the framework.
///
/// The command deriver inspects this set for package-manager markers and
/// tooling flags; everything else is recorded for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Technology {
    Typescript,
    Eslint,
    Prettier,
    Jest,
    Vitest,
    Cypress,
    Playwright,
    Tailwind,
    Redux,
    TanstackQuery,
    Graphql,
    Prisma,
    Express,
    Vite,
    Webpack,
    Pnpm,
    Yarn,
    Bun,
    Turborepo,
    Nx,
    Docker,
    Storybook,
}

impl Technology {
    /// Every technology, in wizard display order.
    pub const ALL: [Self; 22] = [
        Self::Typescript,
        Self::Eslint,
        Self::Prettier,
        Self::Jest,
        Self::Vitest,
        Self::Cypress,
        Self::Playwright,
        Self::Tailwind,
        Self::Redux,
        Self::TanstackQuery,
        Self::Graphql,
        Self::Prisma,
        Self::Express,
        Self::Vite,
        Self::Webpack,
        Self::Pnpm,
        Self::Yarn,
        Self::Bun,
        Self::Turborepo,
        Self::Nx,
        Self::Docker,
        Self::Storybook,
    ];

    /// Parse a stable identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tech| tech.id() == id)
    }

    /// Stable identifier used in profiles and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Typescript => "typescript",
            Self::Eslint => "eslint",
            Self::Prettier => "prettier",
            Self::Jest => "jest",
            Self::Vitest => "vitest",
            Self::Cypress => "cypress",
            Self::Playwright => "playwright",
            Self::Tailwind => "tailwind",
            Self::Redux => "redux",
            Self::TanstackQuery => "tanstack-query",
            Self::Graphql => "graphql",
            Self::Prisma => "prisma",
            Self::Express => "express",
            Self::Vite => "vite",
            Self::Webpack => "webpack",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
            Self::Turborepo => "turborepo",
            Self::Nx => "nx",
            Self::Docker => "docker",
            Self::Storybook => "storybook",
        }
    }

    /// Human-readable name shown by the wizard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Typescript => "TypeScript",
            Self::Eslint => "ESLint",
            Self::Prettier => "Prettier",
            Self::Jest => "Jest",
            Self::Vitest => "Vitest",
            Self::Cypress => "Cypress",
            Self::Playwright => "Playwright",
            Self::Tailwind => "Tailwind CSS",
            Self::Redux => "Redux",
            Self::TanstackQuery => "TanStack Query",
            Self::Graphql => "GraphQL",
            Self::Prisma => "Prisma",
            Self::Express => "Express",
            Self::Vite => "Vite",
            Self::Webpack => "webpack",
            Self::Pnpm => "pnpm",
            Self::Yarn => "Yarn",
            Self::Bun => "Bun",
            Self::Turborepo => "Turborepo",
            Self::Nx => "Nx",
            Self::Docker => "Docker",
            Self::Storybook => "Storybook",
        }
    }
}

/// Overall project layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectType {
    /// One application, one build target.
    #[default]
    Single,
    /// Multiple packages in one repository.
    Monorepo,
    /// Independently deployable services.
    Microservices,
}

impl ProjectType {
    /// Every project type, in wizard display order.
    pub const ALL: [Self; 3] = [Self::Single, Self::Monorepo, Self::Microservices];

    /// Parse a stable identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "single" => Some(Self::Single),
            "monorepo" => Some(Self::Monorepo),
            "microservices" => Some(Self::Microservices),
            _ => None,
        }
    }

    /// Stable identifier used in profiles and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Monorepo => "monorepo",
            Self::Microservices => "microservices",
        }
    }

    /// Human-readable name shown by the wizard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "Single application",
            Self::Monorepo => "Monorepo",
            Self::Microservices => "Microservices",
        }
    }
}

/// How components are grouped on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentOrganization {
    /// Grouped by what files are (`components/`, `hooks/`, `utils/`).
    #[default]
    TypeBased,
    /// Grouped by what files serve (`features/auth/`, `features/billing/`).
    FeatureBased,
}

impl ComponentOrganization {
    /// Every organization style, in wizard display order.
    pub const ALL: [Self; 2] = [Self::TypeBased, Self::FeatureBased];

    /// Parse a stable identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "type-based" => Some(Self::TypeBased),
            "feature-based" => Some(Self::FeatureBased),
            _ => None,
        }
    }

    /// Stable identifier used in profiles and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::TypeBased => "type-based",
            Self::FeatureBased => "feature-based",
        }
    }

    /// Human-readable name shown by the wizard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TypeBased => "Type-based (components/, hooks/, utils/)",
            Self::FeatureBased => "Feature-based (features/auth/, features/billing/)",
        }
    }
}

/// How much documentation the project expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentationLevel {
    /// Comments only where the code cannot speak for itself.
    Minimal,
    /// Public APIs and tricky internals documented.
    #[default]
    Standard,
    /// Everything exported carries documentation and examples.
    Comprehensive,
}

impl DocumentationLevel {
    /// Every level, in wizard display order.
    pub const ALL: [Self; 3] = [Self::Minimal, Self::Standard, Self::Comprehensive];

    /// Parse a stable identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "minimal" => Some(Self::Minimal),
            "standard" => Some(Self::Standard),
            "comprehensive" => Some(Self::Comprehensive),
            _ => None,
        }
    }

    /// Stable identifier used in profiles and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Standard => "standard",
            Self::Comprehensive => "comprehensive",
        }
    }

    /// Human-readable name shown by the wizard and in generated documents.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minimal => "Minimal",
            Self::Standard => "Standard",
            Self::Comprehensive => "Comprehensive",
        }
    }

    /// One-sentence guidance echoed into the code-quality document.
    #[must_use]
    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Minimal => "Document the non-obvious and let the code speak otherwise.",
            Self::Standard => {
                "Public APIs and tricky internals carry doc comments; READMEs stay current."
            }
            Self::Comprehensive => {
                "Every exported symbol is documented and non-trivial APIs ship with examples."
            }
        }
    }
}

/// Task workflows the wizard can include rule documents for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    /// Planning and building new features.
    Features,
    /// Diagnosing and fixing bugs.
    Bugs,
    /// Writing and maintaining tests.
    Testing,
}

impl TaskType {
    /// Every task type, in catalog (and emission) order.
    pub const ALL: [Self; 3] = [Self::Features, Self::Bugs, Self::Testing];

    /// Parse a stable identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "features" => Some(Self::Features),
            "bugs" => Some(Self::Bugs),
            "testing" => Some(Self::Testing),
            _ => None,
        }
    }

    /// Stable identifier used in profiles and on the command line.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Bugs => "bugs",
            Self::Testing => "testing",
        }
    }

    /// Human-readable name shown by the wizard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Features => "Feature development",
            Self::Bugs => "Bug fixing",
            Self::Testing => "Testing",
        }
    }
}

/// A code-quality rule selected in the wizard.
///
/// Each known flag carries its display label and, where one exists, the
/// example block it toggles in the code-quality document. Free-text entries
/// become [`QualityRule::Custom`] and are listed without an example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityRule {
    /// Ban `any` from committed TypeScript.
    NoExplicitAny,
    /// Keep the compiler in strict mode.
    StrictTypescript,
    /// Default to `const` bindings.
    PreferConst,
    /// Annotate return types on exported functions.
    ExplicitReturnTypes,
    /// Keep `console.log` out of committed code.
    NoConsoleLog,
    /// A rule the user typed in, listed verbatim.
    Custom(String),
}

impl QualityRule {
    /// The built-in flags, in wizard display order.
    pub const KNOWN: [Self; 5] = [
        Self::NoExplicitAny,
        Self::StrictTypescript,
        Self::PreferConst,
        Self::ExplicitReturnTypes,
        Self::NoConsoleLog,
    ];

    /// Map text back onto a known flag, or keep it as a custom rule.
    ///
    /// Matching is exact on the display label, so round-tripping a label
    /// through a profile file lands on the same flag.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|rule| rule.label() == text)
            .unwrap_or_else(|| Self::Custom(text.to_string()))
    }

    /// The display label listed in the code-quality document.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::NoExplicitAny => "No `any` types allowed",
            Self::StrictTypescript => "Strict TypeScript mode",
            Self::PreferConst => "Prefer `const` over `let`",
            Self::ExplicitReturnTypes => "Explicit return types on exported functions",
            Self::NoConsoleLog => "No `console.log` in committed code",
            Self::Custom(text) => text,
        }
    }

    /// The example block this flag toggles, if it has one.
    #[must_use]
    pub fn example(&self) -> Option<&'static str> {
        match self {
            Self::NoExplicitAny => Some(sections::EXAMPLE_NO_EXPLICIT_ANY),
            Self::PreferConst => Some(sections::EXAMPLE_PREFER_CONST),
            Self::ExplicitReturnTypes => Some(sections::EXAMPLE_EXPLICIT_RETURN_TYPES),
            Self::StrictTypescript | Self::NoConsoleLog | Self::Custom(_) => None,
        }
    }
}

/// One complete snapshot of the wizard's answers.
///
/// [`crate::generate`] reads this and nothing else, so two equal snapshots
/// always produce byte-identical rule sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Primary framework, if one was selected.
    pub framework: Option<Framework>,
    /// Additional technologies in the stack.
    pub additional_tech: Vec<Technology>,
    /// Overall project layout.
    pub project_type: ProjectType,
    /// Directory application code lives in. Echoed verbatim, may be empty.
    pub source_directory: String,
    /// How components are grouped on disk.
    pub component_organization: ComponentOrganization,
    /// Naming convention for components. Echoed verbatim.
    pub component_naming: String,
    /// Naming convention for files. Echoed verbatim.
    pub file_naming: String,
    /// Import path convention. Echoed verbatim.
    pub import_style: String,
    /// Selected code-quality rules, known flags and custom entries alike.
    pub code_quality: Vec<QualityRule>,
    /// Expected documentation depth.
    pub documentation_level: DocumentationLevel,
    /// Commenting conventions. Echoed as a comma-separated list.
    pub comment_style: Vec<String>,
    /// Sections a README must cover. Echoed as a comma-separated list.
    pub readme_requirements: Vec<String>,
    /// Task workflows to include rule documents for.
    pub task_types: Vec<TaskType>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            framework: None,
            additional_tech: Vec::new(),
            project_type: ProjectType::Single,
            source_directory: "src".to_string(),
            component_organization: ComponentOrganization::TypeBased,
            component_naming: "PascalCase".to_string(),
            file_naming: "kebab-case".to_string(),
            import_style: "absolute imports with an `@/` alias".to_string(),
            code_quality: Vec::new(),
            documentation_level: DocumentationLevel::Standard,
            comment_style: Vec::new(),
            readme_requirements: Vec::new(),
            task_types: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_identifiers_round_trip() {
        for framework in Framework::ALL {
            assert_eq!(Framework::parse(framework.id()), Some(framework));
        }
        assert_eq!(Framework::parse("angular"), None);
        assert_eq!(Framework::parse("React"), None);
    }

    #[test]
    fn technology_identifiers_round_trip() {
        for tech in Technology::ALL {
            assert_eq!(Technology::parse(tech.id()), Some(tech));
        }
        assert_eq!(Technology::parse("gulp"), None);
    }

    #[test]
    fn task_type_identifiers_round_trip() {
        for task in TaskType::ALL {
            assert_eq!(TaskType::parse(task.id()), Some(task));
        }
        assert_eq!(TaskType::parse("refactoring"), None);
    }

    #[test]
    fn quality_rule_parse_matches_exact_labels_only() {
        assert_eq!(
            QualityRule::parse("No `any` types allowed"),
            QualityRule::NoExplicitAny
        );
        assert_eq!(
            QualityRule::parse("no any types allowed"),
            QualityRule::Custom("no any types allowed".to_string())
        );
        assert_eq!(
            QualityRule::parse("Ban default exports"),
            QualityRule::Custom("Ban default exports".to_string())
        );
    }

    #[test]
    fn quality_rule_examples_match_the_flag_set() {
        assert!(QualityRule::NoExplicitAny.example().is_some());
        assert!(QualityRule::PreferConst.example().is_some());
        assert!(QualityRule::ExplicitReturnTypes.example().is_some());
        assert!(QualityRule::StrictTypescript.example().is_none());
        assert!(QualityRule::NoConsoleLog.example().is_none());
        assert!(QualityRule::Custom("anything".to_string()).example().is_none());
    }

    #[test]
    fn default_form_state_is_a_blank_single_app() {
        let form = FormState::default();
        assert_eq!(form.framework, None);
        assert_eq!(form.project_type, ProjectType::Single);
        assert_eq!(form.source_directory, "src");
        assert!(form.code_quality.is_empty());
        assert!(form.task_types.is_empty());
    }
}
