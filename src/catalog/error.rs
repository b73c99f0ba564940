use std::fmt;

#[derive(Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    Io { path: String, source: std::io::Error },

    /// JSON parsing or serialization failed
    Json { context: String, source: serde_json::Error },

    /// YAML parsing failed
    Yaml { context: String, source: serde_yaml::Error },

    /// Two action records share the same key
    DuplicateKey(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, source } => {
                write!(f, "Failed to read catalog '{}': {}", path, source)
            }
            CatalogError::Json { context, source } => {
                write!(f, "JSON error ({}): {}", context, source)
            }
            CatalogError::Yaml { context, source } => {
                write!(f, "YAML error ({}): {}", context, source)
            }
            CatalogError::DuplicateKey(key) => {
                write!(f, "Duplicate action key in catalog: {}", key)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Json { source, .. } => Some(source),
            CatalogError::Yaml { source, .. } => Some(source),
            CatalogError::DuplicateKey(_) => None,
        }
    }
}
