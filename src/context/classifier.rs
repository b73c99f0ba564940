use regex::Regex;

use crate::engine::config::EngineConfig;

use super::position::{Position, prefix_before};

/// Host-side predicates the completion engine consults before composing.
///
/// Editors with a real parse of the document implement this themselves;
/// `LineClassifier` is a text-only fallback.
pub trait ContextClassifier {
    /// Whether the cursor sits inside an opened flag list.
    fn is_inside_cli_region(&self, line: &str, column: usize) -> bool;

    /// Whether the nearest enclosing section annotation is `section`.
    fn is_inside_recognized_section(
        &self,
        document: &str,
        position: Position,
        section: &str,
        annotations: &[String],
    ) -> bool;
}

// ============================================================================
// Line-based classifier
// ============================================================================

/// Classifies context from raw line text.
///
/// - CLI region: the line prefix matches the flag-list pattern
///   (opener followed eventually by the introducer).
/// - Section: scanning upward from the cursor line, the first `@Name` line
///   whose name is a known annotation decides the section.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    flag_list_pattern: Regex,
}

impl LineClassifier {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            flag_list_pattern: config.flag_list_pattern.clone(),
        }
    }
}

impl ContextClassifier for LineClassifier {
    fn is_inside_cli_region(&self, line: &str, column: usize) -> bool {
        self.flag_list_pattern.is_match(prefix_before(line, column))
    }

    fn is_inside_recognized_section(
        &self,
        document: &str,
        position: Position,
        section: &str,
        annotations: &[String],
    ) -> bool {
        let lines: Vec<&str> = document.split('\n').take(position.line + 1).collect();
        lines
            .iter()
            .rev()
            .find_map(|line| annotation_name(line, annotations))
            .map(|name| name == section)
            .unwrap_or(false)
    }
}

/// `@Steps` → `Some("Steps")` when `Steps` is a known annotation.
fn annotation_name<'a>(line: &'a str, annotations: &[String]) -> Option<&'a str> {
    let name = line.trim().strip_prefix('@')?.trim();
    annotations.iter().any(|a| a == name).then_some(name)
}
