use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::snippet::snippet_model::ComposedSnippet;

// ============================================================================
// Editor snippet file — `{ "<name>": { prefix, body, description } }`
// ============================================================================

#[derive(Serialize)]
struct SnippetEntry<'a> {
    prefix: &'a str,
    body: [&'a str; 1],
    description: &'a str,
}

/// Serializes as a map keyed by snippet name, in list order.
struct SnippetFile<'a>(&'a [ComposedSnippet]);

impl Serialize for SnippetFile<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for snippet in self.0 {
            map.serialize_entry(
                &snippet.name,
                &SnippetEntry {
                    prefix: &snippet.name,
                    body: [&snippet.template],
                    description: &snippet.documentation,
                },
            )?;
        }
        map.end()
    }
}

/// Render snippets as an editor snippet file (pretty JSON).
pub fn to_snippet_file_json(snippets: &[ComposedSnippet]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&SnippetFile(snippets))
}

/// Render snippets as a YAML list of `ComposedSnippet`.
pub fn to_snippet_yaml(snippets: &[ComposedSnippet]) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(snippets)
}
