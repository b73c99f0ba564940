use std::sync::Arc;
use std::thread;

use action_snippets::catalog::snapshot::CatalogSnapshot;
use action_snippets::context::classifier::{ContextClassifier, LineClassifier};
use action_snippets::context::position::Position;
use action_snippets::engine::config::{CompletionSettings, EngineConfig, SyntaxConfig};
use action_snippets::engine::engine::CompletionEngine;

use crate::common::fixtures::{engine_config, sample_snapshot};

mod common;

const SCRIPT: &str = "@Setup\nopen browser\n@Steps\n\nclick on :: --\n'click on' :: --\nunknown thing :: --";

/// Classifier with fixed answers, standing in for a host editor.
struct FixedClassifier {
    cli_region: bool,
    in_section: bool,
}

impl ContextClassifier for FixedClassifier {
    fn is_inside_cli_region(&self, _line: &str, _column: usize) -> bool {
        self.cli_region
    }

    fn is_inside_recognized_section(
        &self,
        _document: &str,
        _position: Position,
        _section: &str,
        _annotations: &[String],
    ) -> bool {
        self.in_section
    }
}

// =========================================================================
// Action completions
// =========================================================================

#[test]
fn action_completions_inside_steps_section() {
    let catalog = sample_snapshot();
    let config = engine_config();
    let classifier = LineClassifier::new(&config);
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    let snippets = engine.compose_action_completions(SCRIPT, Position::new(3, 0));
    assert_eq!(snippets.len(), 9);
    assert_eq!(snippets[0].name, "wait w/ argument");
}

#[test]
fn action_completions_empty_outside_section() {
    let catalog = sample_snapshot();
    let config = engine_config();
    let classifier = LineClassifier::new(&config);
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    assert!(engine.compose_action_completions(SCRIPT, Position::new(1, 0)).is_empty());
}

#[test]
fn action_completions_empty_inside_flag_list() {
    let catalog = sample_snapshot();
    let config = engine_config();
    let classifier = LineClassifier::new(&config);
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    assert!(engine.compose_action_completions(SCRIPT, Position::new(4, 14)).is_empty());
}

#[test]
fn action_completions_empty_past_end_of_document() {
    let catalog = sample_snapshot();
    let config = engine_config();
    let classifier = LineClassifier::new(&config);
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    assert!(engine.compose_action_completions(SCRIPT, Position::new(99, 0)).is_empty());
}

#[test]
fn action_completions_follow_host_classifier() {
    let catalog = sample_snapshot();
    let config = engine_config();

    let allowed = FixedClassifier { cli_region: false, in_section: true };
    let in_cli = FixedClassifier { cli_region: true, in_section: true };
    let outside = FixedClassifier { cli_region: false, in_section: false };

    let position = Position::new(0, 0);
    assert!(!CompletionEngine::new(&catalog, &config, &allowed)
        .compose_action_completions("x", position)
        .is_empty());
    assert!(CompletionEngine::new(&catalog, &config, &in_cli)
        .compose_action_completions("x", position)
        .is_empty());
    assert!(CompletionEngine::new(&catalog, &config, &outside)
        .compose_action_completions("x", position)
        .is_empty());
}

#[test]
fn action_completions_use_configured_syntax() {
    let catalog = sample_snapshot();
    let settings = CompletionSettings {
        syntax: SyntaxConfig {
            flag_list_opener: "with".into(),
            flag_introducer: "-".into(),
        },
        ..CompletionSettings::default()
    };
    let config = EngineConfig::from_settings(&settings).unwrap();
    let classifier = FixedClassifier { cli_region: false, in_section: true };
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    let snippets = engine.compose_action_completions("x", Position::new(0, 0));
    let arguments = snippets
        .iter()
        .find(|s| s.name == "click on w/ arguments")
        .unwrap();
    assert_eq!(arguments.template, "click on with -${1:parameters values}");
}

// =========================================================================
// Parameter completions
// =========================================================================

#[test]
fn parameter_completions_for_resolved_action() {
    let catalog = sample_snapshot();
    let config = engine_config();
    let classifier = LineClassifier::new(&config);
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    let flags = engine.compose_parameter_completions(SCRIPT, Position::new(4, 14));
    let names: Vec<&str> = flags.iter().map(|f| f.flag_name.as_str()).collect();
    assert_eq!(names, vec!["timeout", "retries"]);
}

#[test]
fn parameter_completions_empty_for_unknown_action() {
    let catalog = sample_snapshot();
    let config = engine_config();
    let classifier = LineClassifier::new(&config);
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    assert!(engine.compose_parameter_completions(SCRIPT, Position::new(6, 19)).is_empty());
}

#[test]
fn parameter_completions_empty_for_unresolvable_line() {
    let catalog = sample_snapshot();
    let config = engine_config();
    let classifier = LineClassifier::new(&config);
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    // Line starts with a quote, so the action pattern finds nothing.
    assert!(engine.compose_parameter_completions(SCRIPT, Position::new(5, 16)).is_empty());
}

#[test]
fn parameter_completions_empty_for_action_without_flags() {
    let catalog = sample_snapshot();
    let config = engine_config();
    let classifier = LineClassifier::new(&config);
    let engine = CompletionEngine::new(&catalog, &config, &classifier);

    let doc = "@Steps\nwait :: --";
    assert!(engine.compose_parameter_completions(doc, Position::new(1, 10)).is_empty());
}

// =========================================================================
// Snapshots shared across requests
// =========================================================================

#[test]
fn concurrent_requests_share_one_snapshot() {
    let catalog: Arc<CatalogSnapshot> = Arc::new(sample_snapshot());
    let config = Arc::new(engine_config());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            let config = Arc::clone(&config);
            thread::spawn(move || {
                let classifier = LineClassifier::new(&config);
                let engine = CompletionEngine::new(&catalog, &config, &classifier);
                engine.compose_action_completions(SCRIPT, Position::new(3, 0))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].len(), 9);
}
