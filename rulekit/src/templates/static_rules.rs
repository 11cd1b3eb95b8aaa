//! Documents emitted on every run, regardless of form state.

/// Meta-rules for writing rule files themselves.
pub const CURSOR_RULES: &str = r#"---
description: How to write and organize Cursor rule files in this project
globs: .cursor/rules/*.mdc
alwaysApply: false
---

# Cursor Rules Format

## Required Structure

Every rule file starts with a frontmatter block, then a Markdown body:

```markdown
---
description: One line stating what the rule covers
globs: src/**/*.ts
alwaysApply: false
---

# Rule Title

- Actionable guideline with a concrete example
- Another guideline
```

## File Placement

- All rule files live in `.cursor/rules/` and use the `.mdc` extension
- Filenames are kebab-case and name the concern, not the tool version
- One concern per file; split a file that needs more than one H1

## Frontmatter

- `description` is a single line in plain language; it is how the assistant
  decides whether to pull the rule in
- `globs` is a comma-separated list of path patterns the rule applies to;
  leave it empty when `alwaysApply` already covers the whole repository
- `alwaysApply: true` is for rules that hold everywhere, independent of
  which file is open

## Writing Style

- Write imperatives ("Use X", "Never Y"), not descriptions of preference
- Show short good/bad pairs instead of prose where possible
- Reference real files from this repository when an example needs context
- Keep generated rule files untouched; put hand-written rules in their own
  files so regeneration never overwrites them
"#;

/// Meta-rules for keeping the rule set itself healthy over time.
pub const SELF_IMPROVE: &str = r#"---
description: Keep the rule set aligned with how the codebase actually evolves
globs:
alwaysApply: true
---

# Rule Maintenance

## When to Add a Rule

- A pattern shows up in three or more files and newcomers keep missing it
- The same review comment has been written more than twice
- A bug class could have been prevented by a rule that did not exist yet
- A new library or tool establishes conventions the assistant should follow

## When to Update a Rule

- The codebase now contains a better example than the one in the rule
- An edge case surfaced that the rule's wording does not cover
- A linked file moved or was renamed

## When to Retire a Rule

- The code it describes no longer exists
- A linter or compiler option now enforces it mechanically
- Two rules overlap; merge them and delete one

## Quality Bar

- Every rule is actionable; delete vague aspirations
- Examples come from real code, not invented snippets
- Wording stays consistent across rule files so search works
"#;
