//! Framework-specific rule documents.
//!
//! Selecting a framework in the wizard pulls in one or more of these; the
//! per-framework sets live in [`crate::catalog`].

/// React component and hook conventions.
pub const REACT_BEST_PRACTICES: &str = r#"---
description: React component, hook and state management conventions
globs: **/*.tsx,**/*.jsx
alwaysApply: false
---

# React Rules

## Components

- Function components only; no new class components
- One component per file, file named after the component
- Keep a component under roughly 150 lines; extract children early
- Props are destructured in the signature and typed explicitly
- Derive values during render instead of mirroring props into state

## Hooks

- Call hooks at the top level only, never inside conditions or loops
- Extract logic shared by two components into a custom `useXxx` hook
- Dependency arrays are exhaustive; fix the dependency, never silence the
  lint rule
- Effects are for synchronizing with external systems, not for computing
  values you could derive

## State

- Start with local state; lift it only when two siblings need it
- Server data belongs in a query layer, not in component state
- Context is for rarely-changing values (theme, session), not for
  high-frequency updates

## Example

```tsx
// Good: derived during render
const total = items.reduce((sum, item) => sum + item.price, 0);

// Bad: mirrored state that can drift
const [total, setTotal] = useState(0);
useEffect(() => {
  setTotal(items.reduce((sum, item) => sum + item.price, 0));
}, [items]);
```
"#;

/// Next.js App Router conventions.
pub const NEXTJS_BEST_PRACTICES: &str = r#"---
description: Next.js App Router, rendering and data-fetching conventions
globs: app/**/*,src/app/**/*
alwaysApply: false
---

# Next.js Rules

## Routing

- App Router only: routes live under `app/` as `page.tsx` with co-located
  `layout.tsx`, `loading.tsx` and `error.tsx`
- Route groups `(marketing)`, `(app)` organize segments without affecting
  URLs
- Dynamic segments are narrow: `[id]`, not `[...everything]`, unless the
  route genuinely catches all

## Server and Client Components

- Components are Server Components by default; add `"use client"` only at
  interactive leaves
- Fetch data in Server Components and pass plain props down
- Never import server-only modules (database clients, secrets) into client
  components
- Mark boundaries deliberately; a stray `"use client"` at the top of a tree
  opts the whole tree out of server rendering

## Performance

- `next/image` for images and `next/font` for fonts, no raw tags
- Wrap slow data paths in Suspense boundaries so streaming works
- Prefer static rendering; opt into dynamic rendering per route, not
  globally

## Metadata

- Every route exports `metadata` or `generateMetadata`
- Shared defaults live in the root layout and are overridden per segment
"#;

/// Vue 3 single-file-component conventions.
pub const VUE_BEST_PRACTICES: &str = r#"---
description: Vue 3 single-file component and composable conventions
globs: **/*.vue
alwaysApply: false
---

# Vue Rules

## Components

- `<script setup lang="ts">` in every new single-file component
- One component per file, named in PascalCase after the file
- Props are declared with `defineProps<Props>()` and documented types;
  emits with `defineEmits`
- Keep templates flat; extract a child component before nesting a third
  `v-if`/`v-for` level

## Composables

- Shared logic lives in `composables/` as `useXxx` functions
- A composable returns refs and functions, never reaches into component
  internals
- Side effects registered in a composable are cleaned up in
  `onUnmounted`

## Reactivity

- `ref` for primitives, `computed` for derived values; never store what you
  can derive
- Do not destructure reactive objects; use `toRefs` when you must
- Watchers are a last resort; prefer `computed` until an external system is
  involved

## Example

```vue
<script setup lang="ts">
const props = defineProps<{ items: LineItem[] }>();

// Good: derived, stays in sync
const total = computed(() =>
  props.items.reduce((sum, item) => sum + item.price, 0),
);
</script>
```
"#;

/// Node.js backend service conventions.
pub const NODEJS_BEST_PRACTICES: &str = r#"---
description: Node.js service structure, async and operability conventions
globs: **/*.ts,**/*.js
alwaysApply: false
---

# Node.js Rules

## Structure

- Layer the service: routes parse and validate, services hold logic, data
  access stays behind a repository module
- Handlers stay thin; a handler that implements business logic is a smell
- Configuration is read and validated once at startup, then passed down;
  no `process.env` reads scattered through the code

## Async

- `async`/`await` everywhere; no mixed callback styles in new code
- Never leave a floating promise; await it, return it, or explicitly
  handle its rejection
- Wrap external calls (HTTP, database) with timeouts and propagate
  cancellation where the driver supports it

## Errors and Logging

- Throw `Error` subclasses with stable `code` properties; never throw
  strings
- One error-handling middleware translates errors to responses; handlers
  do not format error bodies themselves
- Structured logging with request correlation; no bare `console.log` in
  committed code

## Operability

- Handle `SIGTERM`: stop accepting work, drain in-flight requests, then
  exit
- Expose a health endpoint that checks downstream dependencies
- Pin the Node version in `package.json` engines and in the container
  image
"#;

/// TypeScript usage standards shared by every framework set.
pub const TYPESCRIPT_QUALITY: &str = r#"---
description: TypeScript strictness and type design standards
globs: **/*.ts,**/*.tsx
alwaysApply: false
---

# TypeScript Rules

## Compiler

- `strict: true` stays on; never weaken compiler options for one file
- Type errors are build failures, not warnings to clean up later

## Type Design

- Model domain values with union types before reaching for enums or
  booleans
- `unknown` over `any` at every boundary; narrow with type guards
- `interface` for object shapes meant to be extended, `type` for unions,
  intersections and function signatures
- Mark data that should never mutate as `readonly`
- Export the types a function's signature mentions from the same module

## Narrowing

```ts
// Good: the guard earns the type
function isUser(value: unknown): value is User {
  return (
    typeof value === "object" &&
    value !== null &&
    "id" in value &&
    "email" in value
  );
}

// Bad: the assertion just asserts
const user = value as User;
```

## Nulls

- Prefer returning `T | undefined` over sentinel values
- Use optional chaining and nullish coalescing instead of truthiness
  checks on values where `0` or an empty string is meaningful
"#;
