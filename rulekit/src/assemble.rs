//! Rule-set assembly: one deterministic pass over the form state.

use tracing::debug;

use crate::catalog::{CatalogDocument, STATIC_RULES};
use crate::commands::CommandProfile;
use crate::error::Result;
use crate::form::{FormState, Framework, TaskType};
use crate::render::{
    Renderer, CODE_QUALITY_FILE, DEVELOPMENT_WORKFLOW_FILE, PROJECT_STRUCTURE_FILE,
};

/// One generated rule document, ready to be written under `.cursor/rules/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDocument {
    /// Output filename.
    pub filename: &'static str,
    /// Full document text, frontmatter included.
    pub content: String,
    /// Whether the document is emitted regardless of form state.
    pub is_static: bool,
}

impl RuleDocument {
    fn from_catalog(doc: CatalogDocument, is_static: bool) -> Self {
        Self {
            filename: doc.filename,
            content: doc.content.to_string(),
            is_static,
        }
    }
}

/// Build the ordered rule set for one form-state snapshot.
///
/// The pass is fixed: static rules, framework documents, project structure,
/// development workflow, selected task documents, code quality. Equal
/// snapshots produce byte-identical output, and filenames never collide
/// within one run.
///
/// # Errors
/// Returns [`crate::Error::Render`] if a compiled-in template fragment is
/// malformed. That is a defect in this crate, not in the caller's input.
pub fn generate(form: &FormState) -> Result<Vec<RuleDocument>> {
    let renderer = Renderer::new(form);
    let profile = CommandProfile::derive(&form.additional_tech);
    let mut documents = Vec::new();

    for doc in STATIC_RULES {
        documents.push(RuleDocument::from_catalog(*doc, true));
    }

    if let Some(framework) = form.framework {
        for doc in framework.documents() {
            documents.push(RuleDocument::from_catalog(*doc, false));
        }
    }

    documents.push(RuleDocument {
        filename: PROJECT_STRUCTURE_FILE,
        content: renderer.project_structure()?,
        is_static: false,
    });
    documents.push(RuleDocument {
        filename: DEVELOPMENT_WORKFLOW_FILE,
        content: renderer.development_workflow(&profile)?,
        is_static: false,
    });

    // Selection order in the form does not matter; emission follows the
    // catalog.
    for task in TaskType::ALL {
        if form.task_types.contains(&task) {
            documents.push(RuleDocument::from_catalog(task.document(), false));
        }
    }

    documents.push(RuleDocument {
        filename: CODE_QUALITY_FILE,
        content: renderer.code_quality()?,
        is_static: false,
    });

    debug_assert!(
        filenames_are_unique(&documents),
        "catalog produced colliding filenames"
    );
    debug!(
        documents = documents.len(),
        framework = form.framework.map(Framework::id),
        "rule set assembled"
    );
    Ok(documents)
}

fn filenames_are_unique(documents: &[RuleDocument]) -> bool {
    let mut names: Vec<&str> = documents.iter().map(|doc| doc.filename).collect();
    names.sort_unstable();
    names.windows(2).all(|pair| pair[0] != pair[1])
}
