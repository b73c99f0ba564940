use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::catalog::catalog_model::ActionDescriptor;
use crate::engine::config::EngineConfig;
use crate::snippet::snippet_model::{Named, NamedList};

use super::position::prefix_before;

const QUOTES: [char; 3] = ['\'', '"', '`'];

/// A parameter flag offered at the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCompletion {
    pub flag_name: String,
    pub documentation: String,
}

impl Named for FlagCompletion {
    fn name(&self) -> &str {
        &self.flag_name
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// The line mentions `literal` somewhere not directly after a quote.
///
/// Matching ignores case and accepts any run of whitespace between words,
/// since the resolver does too.
pub fn literal_in_scope(line: &str, literal: &str) -> bool {
    let words: Vec<String> = literal.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return false;
    }
    let pattern = match RegexBuilder::new(&words.join(r"\s+"))
        .case_insensitive(true)
        .build()
    {
        Ok(p) => p,
        Err(_) => return false,
    };

    pattern.find_iter(line).any(|m| {
        line[..m.start()]
            .chars()
            .next_back()
            .map_or(true, |c| !QUOTES.contains(&c))
    })
}

/// The text before the cursor has already opened a flag list.
pub fn inside_flag_list(prefix: &str, flag_list_pattern: &Regex) -> bool {
    flag_list_pattern.is_match(prefix)
}

/// The cursor directly follows a space and the flag introducer (`" --"`).
pub fn at_flag_introducer(prefix: &str, introducer: &str) -> bool {
    prefix
        .strip_suffix(introducer)
        .is_some_and(|rest| rest.ends_with(' '))
}

// ============================================================================
// Filter
// ============================================================================

/// Flags of `descriptor` that may be completed at `column` on `line`.
///
/// A flag is offered only when all three predicates hold. Order follows the
/// declared mapping; repeated names collapse to the last description at the
/// first position.
pub fn filter_flags(
    descriptor: &ActionDescriptor,
    line: &str,
    column: usize,
    config: &EngineConfig,
) -> Vec<FlagCompletion> {
    let prefix = prefix_before(line, column);
    let applies = literal_in_scope(line, &descriptor.base_phrase())
        && inside_flag_list(prefix, &config.flag_list_pattern)
        && at_flag_introducer(prefix, &config.syntax.flag_introducer);

    if !applies {
        tracing::debug!("No flags of '{}' apply at column {}", descriptor.key, column);
        return Vec::new();
    }

    descriptor
        .cli_arguments
        .iter()
        .map(|(name, doc)| FlagCompletion {
            flag_name: name.to_string(),
            documentation: doc.to_string(),
        })
        .collect::<NamedList<_>>()
        .into_vec()
}
