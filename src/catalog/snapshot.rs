use std::collections::HashMap;

use super::catalog_model::{
    ActionDescriptor, AttributeDescriptor, CatalogDocument, LocatorDescriptor,
};
use super::error::CatalogError;

// ============================================================================
// Read-only catalog snapshot
// ============================================================================

/// The ingested, immutable catalog every completion request reads from.
///
/// Built once by `from_document()`. To publish new catalog data, build a new
/// snapshot and swap it in whole (e.g. behind an `Arc`); a snapshot is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    actions: Vec<ActionDescriptor>,
    index: HashMap<String, usize>,
    locators: Vec<LocatorDescriptor>,
    attributes: Vec<AttributeDescriptor>,
    fingerprint: String,
}

impl CatalogSnapshot {
    /// Ingest a catalog document, computing every descriptor's capabilities.
    ///
    /// Fails only when two action records share a key.
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        let canonical = serde_json::to_string(&document).map_err(|source| CatalogError::Json {
            context: "fingerprinting catalog".to_string(),
            source,
        })?;
        let fingerprint = catalog_fingerprint(&canonical);

        let mut actions = Vec::with_capacity(document.actions.len());
        let mut index = HashMap::with_capacity(document.actions.len());

        for record in document.actions {
            if index.contains_key(&record.key) {
                return Err(CatalogError::DuplicateKey(record.key));
            }
            index.insert(record.key.clone(), actions.len());
            actions.push(ActionDescriptor::from_record(record));
        }

        Ok(Self {
            actions,
            index,
            locators: document.locators,
            attributes: document.attributes,
            fingerprint,
        })
    }

    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.actions
    }

    /// Exact-match lookup by action key.
    pub fn find(&self, key: &str) -> Option<&ActionDescriptor> {
        self.index.get(key).map(|&i| &self.actions[i])
    }

    pub fn locator_names(&self) -> Vec<String> {
        self.locators.iter().map(|l| l.name.clone()).collect()
    }

    pub fn attribute_names(&self) -> Vec<String> {
        self.attributes.iter().map(|a| a.name.clone()).collect()
    }

    /// SHA-1 of the catalog's canonical JSON; equal content, equal fingerprint.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn catalog_fingerprint(text: &str) -> String {
    use sha1::{Digest, Sha1};

    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
