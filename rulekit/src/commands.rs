//! Package-manager detection and command-string derivation.
//!
//! The development-workflow document spells out real shell commands, so the
//! exact verbs and flags depend on which package manager the stack uses.
//! Everything here is pure: derivation never fails, and an empty technology
//! set falls back to npm with Vite.

use crate::form::Technology;

/// The package manager commands are spelled for.
///
/// Detection precedence is pnpm, then Yarn, then Bun; npm is the fallback
/// when no manager is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    /// npm, the fallback.
    #[default]
    Npm,
    /// pnpm.
    Pnpm,
    /// Yarn classic.
    Yarn,
    /// Bun.
    Bun,
}

impl PackageManager {
    /// Pick the manager for a technology set by fixed precedence.
    #[must_use]
    pub fn detect(tech: &[Technology]) -> Self {
        if tech.contains(&Technology::Pnpm) {
            Self::Pnpm
        } else if tech.contains(&Technology::Yarn) {
            Self::Yarn
        } else if tech.contains(&Technology::Bun) {
            Self::Bun
        } else {
            Self::Npm
        }
    }

    /// The binary name, which is also how commands are prefixed.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Verb that adds a dependency.
    #[must_use]
    pub const fn add_verb(self) -> &'static str {
        match self {
            Self::Npm => "install",
            Self::Pnpm | Self::Yarn | Self::Bun => "add",
        }
    }

    /// Flag that marks a dependency as dev-only.
    #[must_use]
    pub const fn dev_flag(self) -> &'static str {
        match self {
            Self::Npm => "--save-dev",
            Self::Pnpm => "-D",
            Self::Yarn | Self::Bun => "--dev",
        }
    }

    /// Verb that updates dependencies.
    #[must_use]
    pub const fn update_verb(self) -> &'static str {
        match self {
            Self::Yarn => "upgrade",
            Self::Npm | Self::Pnpm | Self::Bun => "update",
        }
    }

    /// Verb that removes unneeded packages.
    #[must_use]
    pub const fn prune_verb(self) -> &'static str {
        match self {
            Self::Npm | Self::Pnpm => "prune",
            Self::Yarn => "autoclean",
            Self::Bun => "clean",
        }
    }

    /// Prefix that runs a package.json script.
    #[must_use]
    pub const fn run_prefix(self) -> &'static str {
        match self {
            Self::Npm => "npm run",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun run",
        }
    }
}

/// Everything the development-workflow document needs to spell commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandProfile {
    /// The active package manager.
    pub package_manager: PackageManager,
    /// Whether the stack includes TypeScript.
    pub has_typescript: bool,
    /// Whether a test runner (Jest, Vitest, Cypress or Playwright) is present.
    pub has_testing: bool,
    /// Whether a lint or format tool (ESLint or Prettier) is present.
    pub has_linting: bool,
    /// Whether a workspace task runner (Turborepo or Nx) is present.
    pub has_monorepo_tooling: bool,
    /// Bundler named in the build section. webpack when selected, Vite otherwise.
    pub bundler: &'static str,
}

impl CommandProfile {
    /// Derive the full profile from a technology set.
    #[must_use]
    pub fn derive(tech: &[Technology]) -> Self {
        Self {
            package_manager: PackageManager::detect(tech),
            has_typescript: tech.contains(&Technology::Typescript),
            has_testing: tech.iter().any(|t| {
                matches!(
                    t,
                    Technology::Jest
                        | Technology::Vitest
                        | Technology::Cypress
                        | Technology::Playwright
                )
            }),
            has_linting: tech
                .iter()
                .any(|t| matches!(t, Technology::Eslint | Technology::Prettier)),
            has_monorepo_tooling: tech
                .iter()
                .any(|t| matches!(t, Technology::Turborepo | Technology::Nx)),
            bundler: if tech.contains(&Technology::Webpack) {
                "webpack"
            } else {
                "vite"
            },
        }
    }
}
