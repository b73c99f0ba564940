use crate::context::flag_filter::FlagCompletion;
use crate::context::position::Position;
use crate::snippet::snippet_model::ComposedSnippet;

// ============================================================================
// Console output — formatted terminal listings
// ============================================================================

/// Format a snippet list for terminal output.
///
/// Produces output like:
/// ```text
/// === Snippets (2) ===
///
///   click on element w/ argument
///     click on element ${1:value}
///   click on element w/ argument w/ element
///     click on element ${1:value} click ${5:locator value} by ${6|css,id|}
/// ```
pub fn format_snippet_list(snippets: &[ComposedSnippet]) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Snippets ({}) ===\n\n", snippets.len()));

    for snippet in snippets {
        out.push_str(&format!("  {}\n", snippet.name));
        out.push_str(&format!("    {}\n", snippet.template));
    }

    out
}

/// Format the result of a `complete` request.
pub fn format_completion_report(
    position: Position,
    resolved_key: Option<&str>,
    actions: &[ComposedSnippet],
    flags: &[FlagCompletion],
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Completions at {}:{} ===\n\n",
        position.line, position.column
    ));

    match resolved_key {
        Some(key) => out.push_str(&format!("Resolved action: {}\n", key)),
        None => out.push_str("Resolved action: (none)\n"),
    }

    out.push_str(&format!("\nActions ({}):\n", actions.len()));
    for snippet in actions {
        out.push_str(&format!("  {}\n", snippet.name));
    }

    out.push_str(&format!("\nFlags ({}):\n", flags.len()));
    for flag in flags {
        if flag.documentation.is_empty() {
            out.push_str(&format!("  --{}\n", flag.flag_name));
        } else {
            out.push_str(&format!("  --{} — {}\n", flag.flag_name, flag.documentation));
        }
    }

    out
}
