use std::path::Path;

use super::catalog_model::CatalogDocument;
use super::error::CatalogError;
use super::snapshot::CatalogSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// `.yaml`/`.yml` → YAML, anything else → JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => CatalogFormat::Yaml,
            _ => CatalogFormat::Json,
        }
    }
}

/// Parse catalog text without ingesting it.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<CatalogDocument, CatalogError> {
    match format {
        CatalogFormat::Json => serde_json::from_str(content).map_err(|source| CatalogError::Json {
            context: "parsing catalog".to_string(),
            source,
        }),
        CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(|source| CatalogError::Yaml {
            context: "parsing catalog".to_string(),
            source,
        }),
    }
}

/// Read, parse and ingest a catalog file into a snapshot.
pub fn load_catalog(path: &str) -> Result<CatalogSnapshot, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_string(),
        source,
    })?;

    let document = parse_catalog(&content, CatalogFormat::from_path(Path::new(path)))?;
    let snapshot = CatalogSnapshot::from_document(document)?;

    tracing::info!(
        "Loaded catalog {} ({} actions, fingerprint {})",
        path,
        snapshot.len(),
        snapshot.fingerprint()
    );

    Ok(snapshot)
}
