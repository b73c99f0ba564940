use crate::catalog::snapshot::CatalogSnapshot;
use crate::engine::config::SyntaxConfig;

use super::compiler::{CompileContext, compose_for};
use super::snippet_model::{ComposedSnippet, NamedList};

/// Compile every descriptor in the catalog and collapse names catalog-wide.
///
/// A later descriptor that produces an already-seen name overwrites the
/// earlier snippet's content but keeps its position. This also merges
/// identically named base variants coming from different descriptors.
pub fn compose_catalog(catalog: &CatalogSnapshot, syntax: &SyntaxConfig) -> Vec<ComposedSnippet> {
    let locators = catalog.locator_names();
    let attributes = catalog.attribute_names();
    let ctx = CompileContext {
        locators: &locators,
        attributes: &attributes,
        syntax,
    };

    let mut set = NamedList::new();
    for descriptor in catalog.actions() {
        set.extend(compose_for(descriptor, &ctx));
    }

    tracing::debug!(
        "Composed {} snippets from {} actions",
        set.len(),
        catalog.len()
    );

    set.into_vec()
}
