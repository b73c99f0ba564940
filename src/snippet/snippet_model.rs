use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named, insertable template produced from one action descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedSnippet {
    /// Completion label, also the dedup key
    pub name: String,

    /// Snippet body with numbered placeholders
    pub template: String,

    pub documentation: String,
    pub detail: String,
}

/// Anything that collapses by name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for ComposedSnippet {
    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Stable-position, last-write-wins list
// ============================================================================

/// An ordered list that collapses entries by name.
///
/// When a name repeats, the newer entry replaces the older one in place: the
/// content is the last one pushed, the position is where the name first
/// appeared.
#[derive(Debug, Clone)]
pub struct NamedList<T> {
    items: Vec<T>,
    first_seen: HashMap<String, usize>,
}

impl<T: Named> NamedList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            first_seen: HashMap::new(),
        }
    }

    /// Insert or overwrite. Returns `true` if the name was already present.
    pub fn push(&mut self, item: T) -> bool {
        match self.first_seen.get(item.name()) {
            Some(&position) => {
                tracing::debug!("Replacing duplicate entry '{}' at {}", item.name(), position);
                self.items[position] = item;
                true
            }
            None => {
                self.first_seen.insert(item.name().to_string(), self.items.len());
                self.items.push(item);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Named> Default for NamedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Named> Extend<T> for NamedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Named> FromIterator<T> for NamedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = NamedList::new();
        list.extend(iter);
        list
    }
}
