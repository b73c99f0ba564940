use crate::catalog::loader::load_catalog;
use crate::cli::config::{AppConfig, build_engine_config};
use crate::context::classifier::LineClassifier;
use crate::context::position::{Position, line_at};
use crate::context::resolver::typed_key;
use crate::engine::engine::CompletionEngine;
use crate::output::console::{format_completion_report, format_snippet_list};
use crate::output::snippet_file::{to_snippet_file_json, to_snippet_yaml};
use crate::snippet::catalog_set::compose_catalog;

// ============================================================================
// snippets subcommand
// ============================================================================

/// Compile the whole catalog and print or write it in the requested format.
pub fn cmd_snippets(
    catalog_path: &str,
    format: &str,
    output: Option<&str>,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine_config = build_engine_config(config)?;
    let catalog = load_catalog(catalog_path)?;
    let snippets = compose_catalog(&catalog, &engine_config.syntax);

    let output_content = match format {
        "json" => to_snippet_file_json(&snippets)?,
        "yaml" => to_snippet_yaml(&snippets)?,
        _ => format_snippet_list(&snippets),
    };

    match output {
        Some(path) => {
            std::fs::write(path, &output_content)?;
            tracing::info!("Wrote {} snippets to {}", snippets.len(), path);
        }
        None => print!("{}", output_content),
    }

    Ok(())
}

// ============================================================================
// complete subcommand
// ============================================================================

/// Run both completion requests at a cursor position and print the results.
pub fn cmd_complete(
    catalog_path: &str,
    document_path: &str,
    position: Position,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let engine_config = build_engine_config(config)?;
    let catalog = load_catalog(catalog_path)?;
    let document = std::fs::read_to_string(document_path)?;
    let classifier = LineClassifier::new(&engine_config);
    let engine = CompletionEngine::new(&catalog, &engine_config, &classifier);

    let actions = engine.compose_action_completions(&document, position);
    let flags = engine.compose_parameter_completions(&document, position);
    let resolved = line_at(&document, position.line)
        .and_then(|line| engine.resolve(line))
        .map(|d| d.key.as_str());

    print!(
        "{}",
        format_completion_report(position, resolved, &actions, &flags)
    );
    Ok(())
}

// ============================================================================
// resolve subcommand
// ============================================================================

/// Print the key typed on `text` and whether the catalog knows it.
///
/// Returns whether the key resolved.
pub fn cmd_resolve(
    catalog_path: &str,
    text: &str,
    config: &AppConfig,
) -> Result<bool, Box<dyn std::error::Error>> {
    let engine_config = build_engine_config(config)?;
    let catalog = load_catalog(catalog_path)?;

    match typed_key(text, &engine_config.action_pattern) {
        Some(key) => {
            let found = catalog.find(&key).is_some();
            println!("{} ({})", key, if found { "found" } else { "not in catalog" });
            Ok(found)
        }
        None => {
            println!("(no action recognized)");
            Ok(false)
        }
    }
}
