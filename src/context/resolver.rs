use regex::Regex;

use crate::catalog::catalog_model::ActionDescriptor;
use crate::catalog::snapshot::CatalogSnapshot;

/// Rebuild a catalog key from typed text: lowercase, split on whitespace,
/// uppercase each word's first character, concatenate.
///
/// `"click on"` → `"ClickOn"`
pub fn canonical_key(typed: &str) -> String {
    typed
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// The key typed on `line`, if the action pattern matches at all.
pub fn typed_key(line: &str, action_pattern: &Regex) -> Option<String> {
    let typed = action_pattern.find(line)?;
    let key = canonical_key(typed.as_str());
    (!key.is_empty()).then_some(key)
}

/// Find the descriptor whose key is typed on `line`.
///
/// No match and unknown keys both resolve to `None`.
pub fn resolve_action<'a>(
    line: &str,
    action_pattern: &Regex,
    catalog: &'a CatalogSnapshot,
) -> Option<&'a ActionDescriptor> {
    let key = typed_key(line, action_pattern)?;
    let descriptor = catalog.find(&key);
    if descriptor.is_none() {
        tracing::debug!("No action with key '{}' in catalog", key);
    }
    descriptor
}
