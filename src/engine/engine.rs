use crate::catalog::catalog_model::ActionDescriptor;
use crate::catalog::snapshot::CatalogSnapshot;
use crate::context::classifier::ContextClassifier;
use crate::context::flag_filter::{FlagCompletion, filter_flags};
use crate::context::position::{Position, line_at};
use crate::context::resolver::resolve_action;
use crate::snippet::catalog_set::compose_catalog;
use crate::snippet::snippet_model::ComposedSnippet;

use super::config::EngineConfig;

// ============================================================================
// Completion engine — the request/response contract exposed to the host
// ============================================================================

/// Answers completion requests against one catalog snapshot.
///
/// Holds only shared references: a request is a pure function of the
/// snapshot, the config and the document text, so engines over the same
/// snapshot may serve requests concurrently.
#[derive(Clone, Copy)]
pub struct CompletionEngine<'a> {
    catalog: &'a CatalogSnapshot,
    config: &'a EngineConfig,
    classifier: &'a dyn ContextClassifier,
}

impl<'a> CompletionEngine<'a> {
    pub fn new(
        catalog: &'a CatalogSnapshot,
        config: &'a EngineConfig,
        classifier: &'a dyn ContextClassifier,
    ) -> Self {
        Self {
            catalog,
            config,
            classifier,
        }
    }

    /// Full action snippets, offered only inside the recognized section and
    /// outside any flag list. Otherwise empty.
    pub fn compose_action_completions(
        &self,
        document: &str,
        position: Position,
    ) -> Vec<ComposedSnippet> {
        let Some(line) = line_at(document, position.line) else {
            return Vec::new();
        };

        if self.classifier.is_inside_cli_region(line, position.column) {
            tracing::debug!("Cursor {:?} is inside a flag list", position);
            return Vec::new();
        }

        if !self.classifier.is_inside_recognized_section(
            document,
            position,
            &self.config.section,
            &self.config.annotations,
        ) {
            tracing::debug!("Cursor {:?} is outside section '{}'", position, self.config.section);
            return Vec::new();
        }

        compose_catalog(self.catalog, &self.config.syntax)
    }

    /// Flags of the action typed on the cursor line. Empty when the action
    /// cannot be resolved or no flag applies.
    pub fn compose_parameter_completions(
        &self,
        document: &str,
        position: Position,
    ) -> Vec<FlagCompletion> {
        let Some(line) = line_at(document, position.line) else {
            return Vec::new();
        };

        match self.resolve(line) {
            Some(descriptor) => filter_flags(descriptor, line, position.column, self.config),
            None => Vec::new(),
        }
    }

    /// The descriptor whose key is typed on `line`.
    pub fn resolve(&self, line: &str) -> Option<&'a ActionDescriptor> {
        resolve_action(line, &self.config.action_pattern, self.catalog)
    }
}
