//! Handlebars fragments for the three state-dependent documents.
//!
//! The renderer picks fragments by form state, renders each against the same
//! context, and joins them with blank lines. Fragments carry no leading or
//! trailing blank lines of their own.

// --- project-structure.mdc ---

/// Opening section naming the source directory.
pub const STRUCTURE_HEADER: &str = r"# Project Structure

## Source Layout

Application code lives in `{{source_directory}}`. Keep generated artifacts,
one-off scripts and tooling configuration out of it.";

/// Structure requirements for a single application.
pub const STRUCTURE_SINGLE: &str = r"## Structure Requirements

- Single application: one build target and one dependency manifest at the
  repository root
- Shared helpers live in a dedicated module under `{{source_directory}}`,
  never copied between features
- Keep the import graph acyclic; a utility that imports from a feature is
  in the wrong place";

/// Structure requirements for a monorepo.
pub const STRUCTURE_MONOREPO: &str = r"## Structure Requirements

- Monorepo: each package under `packages/` owns its manifest, build and
  tests
- Packages depend on each other through published entry points, never deep
  file imports
- Shared tooling configuration (lint rules, tsconfig bases) is hoisted to
  the workspace root and extended per package
- A change that touches several packages states its release plan";

/// Structure requirements for microservices.
pub const STRUCTURE_MICROSERVICES: &str = r"## Structure Requirements

- Microservices: each service under `services/` builds and deploys
  independently
- Services share contracts through versioned schema packages, never by
  importing each other's source
- Service boundaries follow ownership; two services one team always edits
  together are one service
- Cross-service changes roll out in backward-compatible steps";

/// Directory sketch for type-based organization.
pub const TREE_TYPE_BASED: &str = r"## Component Organization

Group files by what they are:

```
{{source_directory}}/
├── components/
│   ├── Button.tsx
│   └── Modal.tsx
├── hooks/
│   └── use-auth.ts
├── utils/
│   └── format.ts
└── types/
    └── user.ts
```";

/// Directory sketch for feature-based organization.
pub const TREE_FEATURE_BASED: &str = r"## Component Organization

Group files by what they serve:

```
{{source_directory}}/
├── features/
│   ├── auth/
│   │   ├── components/
│   │   ├── hooks/
│   │   └── index.ts
│   └── billing/
│       ├── components/
│       └── index.ts
└── shared/
    ├── components/
    └── utils/
```

Features export a public surface from `index.ts`; nothing outside a feature
imports its internals.";

/// Naming conventions echoed from the wizard.
pub const NAMING_CONVENTIONS: &str = r"## Naming Conventions

- Components: {{component_naming}}
- Files: {{file_naming}}
- Imports: {{import_style}}";

// --- development-workflow.mdc ---

/// Package-management commands, spelled for the active manager.
pub const WORKFLOW_PACKAGES: &str = r"# Development Workflow

## Package Management

All dependency operations go through `{{package_manager}}`. Never mix
package managers in one checkout; the lockfile is the source of truth.

```bash
# Install all dependencies
{{package_manager}} install

# Add a dependency
{{package_manager}} {{add_verb}} <package>

# Add a dev dependency
{{package_manager}} {{add_verb}} {{dev_flag}} <package>

# Update dependencies
{{package_manager}} {{update_verb}}

# Remove unneeded packages
{{package_manager}} {{prune_verb}}
```";

/// Type-checking commands; present when the stack includes TypeScript.
pub const WORKFLOW_TYPECHECK: &str = r"## Type Checking

Types are part of the build; code with type errors does not merge.

```bash
# Check types without emitting output
{{run_prefix}} typecheck
```

The `typecheck` script maps to `tsc --noEmit` in package.json.";

/// Test commands; present when a test runner is in the stack.
pub const WORKFLOW_TESTING: &str = r"## Testing

Run the suite before every push. A red suite blocks everything else.

```bash
# Run the full test suite
{{run_prefix}} test

# Watch mode while developing
{{run_prefix}} test -- --watch
```";

/// Lint and format commands; present when a lint tool is in the stack.
pub const WORKFLOW_LINTING: &str = r"## Linting and Formatting

Lint and format locally; CI only confirms what already ran.

```bash
# Lint the project
{{run_prefix}} lint

# Apply automatic fixes
{{run_prefix}} lint -- --fix

# Format the tree
{{run_prefix}} format
```";

/// Workspace task-runner commands; present with Turborepo or Nx.
pub const WORKFLOW_MONOREPO: &str = r"## Monorepo Tasks

Run tasks through the workspace runner so caching and task ordering apply.

```bash
# Run a task across every package
{{run_prefix}} build

# Scope a task to one package
{{run_prefix}} build --filter <package>
```";

/// Build and dev-server commands naming the bundler.
pub const WORKFLOW_BUILD: &str = r"## Build

Production bundles come from {{bundler}}; the dev server and the build
share one configuration.

```bash
# Local development server
{{run_prefix}} dev

# Production build
{{run_prefix}} build
```

Build inputs come from the lockfile, never from globally installed tools.";

// --- code-quality.mdc ---

/// Opening section listing the selected quality rules.
pub const QUALITY_RULES: &str = r"# Code Quality

## Quality Rules

{{rules}}";

/// Documentation expectations echoed from the wizard.
pub const QUALITY_DOCUMENTATION: &str = r"## Documentation

Documentation level: **{{documentation_level}}**. {{documentation_guidance}}

- Comment style: {{comment_style}}
- README must cover: {{readme_requirements}}";

/// Example block toggled by the no-`any` rule.
pub const EXAMPLE_NO_EXPLICIT_ANY: &str = r#"### Good: Proper typing

```ts
// Good: the shape is explicit and checked at the boundary
function parseUser(raw: string): User {
  return userSchema.parse(JSON.parse(raw));
}

// Bad: `any` turns off checking for every caller downstream
function parseUser(raw: any) {
  return JSON.parse(raw);
}
```"#;

/// Example block toggled by the prefer-`const` rule.
pub const EXAMPLE_PREFER_CONST: &str = r"### Good: `const` by default

```ts
// Good: the binding never changes
const retries = 3;

// Bad: `let` signals mutation that never happens
let retries = 3;
```

Reach for `let` only when a binding is genuinely reassigned; loops that
reassign an accumulator usually want `reduce` instead.";

/// Example block toggled by the explicit-return-types rule.
pub const EXAMPLE_EXPLICIT_RETURN_TYPES: &str = r"### Good: Explicit return types

```ts
// Good: the contract is visible at the signature
export function totalOf(items: LineItem[]): Money {
  return items.reduce((sum, item) => sum.plus(item.price), Money.zero());
}

// Bad: the return type silently changes when the body does
export function totalOf(items: LineItem[]) {
  return items.reduce((sum, item) => sum.plus(item.price), Money.zero());
}
```

Interior and test-only functions may rely on inference; exported ones may
not.";
