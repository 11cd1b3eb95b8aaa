//! Property tests for the generation pass.

use std::collections::HashSet;

use proptest::prelude::*;

use rulekit::{
    parse_document, ComponentOrganization, DocumentationLevel, FormState, Framework, ProjectType,
    QualityRule, TaskType, Technology,
};

fn framework_strategy() -> impl Strategy<Value = Option<Framework>> {
    proptest::option::of(proptest::sample::select(Framework::ALL.to_vec()))
}

fn tech_strategy() -> impl Strategy<Value = Vec<Technology>> {
    proptest::collection::vec(proptest::sample::select(Technology::ALL.to_vec()), 0..8)
}

fn task_strategy() -> impl Strategy<Value = Vec<TaskType>> {
    proptest::collection::vec(proptest::sample::select(TaskType::ALL.to_vec()), 0..3)
}

fn quality_strategy() -> impl Strategy<Value = Vec<QualityRule>> {
    let rule = prop_oneof![
        proptest::sample::select(QualityRule::KNOWN.to_vec()),
        "[A-Za-z ]{1,30}".prop_map(QualityRule::Custom),
    ];
    proptest::collection::vec(rule, 0..5)
}

fn form_strategy() -> impl Strategy<Value = FormState> {
    (
        framework_strategy(),
        tech_strategy(),
        proptest::sample::select(ProjectType::ALL.to_vec()),
        "[a-z][a-z/]{0,11}",
        proptest::sample::select(ComponentOrganization::ALL.to_vec()),
        quality_strategy(),
        proptest::sample::select(DocumentationLevel::ALL.to_vec()),
        task_strategy(),
    )
        .prop_map(
            |(
                framework,
                additional_tech,
                project_type,
                source_directory,
                component_organization,
                code_quality,
                documentation_level,
                task_types,
            )| FormState {
                framework,
                additional_tech,
                project_type,
                source_directory,
                component_organization,
                code_quality,
                documentation_level,
                task_types,
                ..FormState::default()
            },
        )
}

proptest! {
    #[test]
    fn generation_is_deterministic(form in form_strategy()) {
        let first = rulekit::generate(&form).unwrap();
        let second = rulekit::generate(&form).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn static_documents_always_lead(form in form_strategy()) {
        let documents = rulekit::generate(&form).unwrap();
        prop_assert!(documents.len() >= 5);
        prop_assert_eq!(documents[0].filename, "cursor-rules.mdc");
        prop_assert_eq!(documents[1].filename, "self-improve.mdc");
        prop_assert!(documents[0].is_static && documents[1].is_static);
        prop_assert!(documents.iter().skip(2).all(|doc| !doc.is_static));
    }

    #[test]
    fn filenames_are_unique_within_a_run(form in form_strategy()) {
        let documents = rulekit::generate(&form).unwrap();
        let mut seen = HashSet::new();
        for doc in &documents {
            prop_assert!(seen.insert(doc.filename), "duplicate {}", doc.filename);
        }
    }

    #[test]
    fn every_document_parses_back(form in form_strategy()) {
        for doc in rulekit::generate(&form).unwrap() {
            let parsed = parse_document(&doc.content);
            prop_assert!(
                parsed.is_ok(),
                "{} failed to parse: {:?}",
                doc.filename,
                parsed.err()
            );
        }
    }

    #[test]
    fn code_quality_always_closes_the_set(form in form_strategy()) {
        let documents = rulekit::generate(&form).unwrap();
        prop_assert_eq!(documents.last().map(|doc| doc.filename), Some("code-quality.mdc"));
    }

    #[test]
    fn framework_selection_only_adds_documents(form in form_strategy()) {
        let with_framework = rulekit::generate(&form).unwrap();
        let without = rulekit::generate(&FormState { framework: None, ..form.clone() }).unwrap();
        let base: HashSet<&str> = without.iter().map(|doc| doc.filename).collect();
        let extended: HashSet<&str> = with_framework.iter().map(|doc| doc.filename).collect();
        prop_assert!(base.is_subset(&extended));
    }
}
