//! Compiled-in document catalogs and the framework/task document sets.
//!
//! Filenames are part of the contract: the assembler emits documents in
//! catalog order and a consuming editor matches on the exact names.

use crate::form::{Framework, TaskType};
use crate::templates::{frameworks, static_rules, tasks};

/// A compiled-in document: target filename plus complete text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogDocument {
    /// Output filename under `.cursor/rules/`.
    pub filename: &'static str,
    /// Full document text, frontmatter included.
    pub content: &'static str,
}

/// Documents emitted on every run, in emission order.
pub const STATIC_RULES: &[CatalogDocument] = &[
    CatalogDocument {
        filename: "cursor-rules.mdc",
        content: static_rules::CURSOR_RULES,
    },
    CatalogDocument {
        filename: "self-improve.mdc",
        content: static_rules::SELF_IMPROVE,
    },
];

const REACT: CatalogDocument = CatalogDocument {
    filename: "react-best-practices.mdc",
    content: frameworks::REACT_BEST_PRACTICES,
};

const VUE: CatalogDocument = CatalogDocument {
    filename: "vue-best-practices.mdc",
    content: frameworks::VUE_BEST_PRACTICES,
};

const NEXTJS: CatalogDocument = CatalogDocument {
    filename: "nextjs-best-practices.mdc",
    content: frameworks::NEXTJS_BEST_PRACTICES,
};

const NODEJS: CatalogDocument = CatalogDocument {
    filename: "nodejs-best-practices.mdc",
    content: frameworks::NODEJS_BEST_PRACTICES,
};

const TYPESCRIPT: CatalogDocument = CatalogDocument {
    filename: "typescript-quality.mdc",
    content: frameworks::TYPESCRIPT_QUALITY,
};

const REACT_SET: &[CatalogDocument] = &[REACT, TYPESCRIPT];
const VUE_SET: &[CatalogDocument] = &[VUE, TYPESCRIPT];
// Next.js layers on top of the React rules rather than repeating them.
const NEXTJS_SET: &[CatalogDocument] = &[NEXTJS, REACT, TYPESCRIPT];
const NODEJS_SET: &[CatalogDocument] = &[NODEJS, TYPESCRIPT];

impl Framework {
    /// The rule documents this framework pulls in, in emission order.
    #[must_use]
    pub const fn documents(self) -> &'static [CatalogDocument] {
        match self {
            Self::React => REACT_SET,
            Self::Vue => VUE_SET,
            Self::NextJs => NEXTJS_SET,
            Self::NodeJs => NODEJS_SET,
        }
    }
}

impl TaskType {
    /// The rule document this task type pulls in.
    #[must_use]
    pub const fn document(self) -> CatalogDocument {
        match self {
            Self::Features => CatalogDocument {
                filename: "feature-development.mdc",
                content: tasks::FEATURE_DEVELOPMENT,
            },
            Self::Bugs => CatalogDocument {
                filename: "bug-fixing.mdc",
                content: tasks::BUG_FIXING,
            },
            Self::Testing => CatalogDocument {
                filename: "testing-standards.mdc",
                content: tasks::TESTING_STANDARDS,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn static_rules_come_in_fixed_order() {
        let names: Vec<&str> = STATIC_RULES.iter().map(|doc| doc.filename).collect();
        assert_eq!(names, ["cursor-rules.mdc", "self-improve.mdc"]);
    }

    #[test]
    fn framework_sets_share_the_typescript_document() {
        for framework in Framework::ALL {
            let names: Vec<&str> = framework
                .documents()
                .iter()
                .map(|doc| doc.filename)
                .collect();
            assert_eq!(
                names.last().copied(),
                Some("typescript-quality.mdc"),
                "{framework:?} set must end with the shared TypeScript rules"
            );
        }
    }

    #[test]
    fn react_set_is_exactly_react_plus_typescript() {
        let names: Vec<&str> = Framework::React
            .documents()
            .iter()
            .map(|doc| doc.filename)
            .collect();
        assert_eq!(
            names,
            ["react-best-practices.mdc", "typescript-quality.mdc"]
        );
    }

    #[test]
    fn nextjs_set_includes_react() {
        let names: Vec<&str> = Framework::NextJs
            .documents()
            .iter()
            .map(|doc| doc.filename)
            .collect();
        assert_eq!(
            names,
            [
                "nextjs-best-practices.mdc",
                "react-best-practices.mdc",
                "typescript-quality.mdc"
            ]
        );
    }

    #[test]
    fn task_documents_map_one_to_one() {
        assert_eq!(
            TaskType::Features.document().filename,
            "feature-development.mdc"
        );
        assert_eq!(TaskType::Bugs.document().filename, "bug-fixing.mdc");
        assert_eq!(
            TaskType::Testing.document().filename,
            "testing-standards.mdc"
        );
    }

    #[test]
    fn no_filename_collides_across_catalogs() {
        let mut seen = HashSet::new();
        for doc in STATIC_RULES {
            assert!(seen.insert(doc.filename), "duplicate {}", doc.filename);
        }
        for framework in Framework::ALL {
            for doc in framework.documents() {
                // The shared TypeScript document repeats across sets by design.
                seen.insert(doc.filename);
            }
        }
        for task in TaskType::ALL {
            assert!(
                seen.insert(task.document().filename),
                "duplicate {}",
                task.document().filename
            );
        }
    }

    #[test]
    fn every_catalog_document_opens_with_frontmatter() {
        let mut all: Vec<CatalogDocument> = STATIC_RULES.to_vec();
        for framework in Framework::ALL {
            all.extend_from_slice(framework.documents());
        }
        for task in TaskType::ALL {
            all.push(task.document());
        }
        for doc in all {
            assert!(
                doc.content.starts_with("---\n"),
                "{} must open with a frontmatter block",
                doc.filename
            );
            assert!(
                doc.content.contains("\ndescription: "),
                "{} must carry a description",
                doc.filename
            );
        }
    }
}
