//! Task-workflow rule documents, one per selectable task type.

/// Workflow for planning and building a new feature.
pub const FEATURE_DEVELOPMENT: &str = r#"---
description: Process for planning, implementing and finishing a feature
globs:
alwaysApply: false
---

# Feature Development

## Before Writing Code

- Restate the feature as observable behavior: what can the user do
  afterwards that they could not before?
- Search the codebase for prior art; extend an existing pattern before
  inventing a new one
- List the files you expect to touch; a surprising file on that list means
  the plan is wrong or the architecture is

## While Implementing

- Slice the work so every commit leaves the application working
- Build the data model first, then the logic, then the surface
- New code follows the conventions in the structure and quality rules even
  where neighboring old code does not
- Flag-guard anything that ships before it is complete

## Definition of Done

- Tests cover the new behavior, including at least one failure path
- Types check, lint passes, no new warnings
- User-facing changes are reflected in the README or docs
- A rule file is updated when the feature establishes a new convention
"#;

/// Workflow for diagnosing and fixing a bug.
pub const BUG_FIXING: &str = r#"---
description: Process for diagnosing, fixing and closing out a bug
globs:
alwaysApply: false
---

# Bug Fixing

## Reproduce First

- Reproduce the bug before changing anything; capture the reproduction as
  a failing test when at all possible
- If it cannot be reproduced, instrument and wait; do not fix blind

## Diagnose

- Find the root cause, not the first place a patch would mask the symptom
- Read the code path end to end; bugs cluster at boundaries and
  conversions
- Check version control history for when the behavior changed and why

## Fix

- Fix at the lowest layer that owns the invariant, not where the error
  surfaced
- Keep the fix minimal; resist drive-by refactoring in the same change
- The failing test from the reproduction step now passes and stays in the
  suite as a regression test

## Close Out

- Search for the same bug class elsewhere in the codebase
- State the root cause in the commit message
- If a rule could have prevented the bug, add or update one
"#;

/// Standards for writing and maintaining tests.
pub const TESTING_STANDARDS: &str = r#"---
description: Standards for writing, naming and maintaining tests
globs: **/*.test.*,**/*.spec.*
alwaysApply: false
---

# Testing Standards

## What to Test

- Test observable behavior through public interfaces, not implementation
  details
- Every bug fix carries a regression test
- Coverage follows risk: core flows and tricky edges first, not a
  percentage target

## How to Write Tests

- Name tests after the scenario and the expected outcome
- Arrange, act, assert, in that order, with one logical assertion per test
- Test data states only the fields the scenario cares about; builders or
  factories supply the rest
- Unit tests sit next to the code; integration tests get their own
  directory

## Keeping Tests Healthy

- Deterministic always: no real network, no real clock, no shared mutable
  fixtures
- A flaky test is quarantined the day it flakes and fixed or deleted the
  same week
- Update the test when behavior changes intentionally; never loosen an
  assertion just to get green
"#;
