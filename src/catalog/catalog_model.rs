use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::capability::{Capability, CapabilitySet};
use crate::snippet::token::to_phrase;

// ============================================================================
// Wire format — what the catalog fetcher hands us
// ============================================================================

/// A whole catalog as delivered by the fetch collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    #[serde(default)]
    pub actions: Vec<ActionRecord>,

    #[serde(default)]
    pub locators: Vec<LocatorDescriptor>,

    #[serde(default)]
    pub attributes: Vec<AttributeDescriptor>,
}

/// One action record, exactly as it appears on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// PascalCase identifier, e.g. `ClickOnElement`
    pub key: String,

    /// Imperative word used when the action targets an element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityBag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cli_arguments: Option<CliArguments>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntityBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyBag>,
}

/// Only the presence of these keys matters; their values are opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_to_act_on: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_attribute_to_act_on: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_expression: Option<serde_json::Value>,
}

impl PropertyBag {
    fn capabilities(&self) -> CapabilitySet {
        [
            (self.argument.is_some(), Capability::Argument),
            (self.element_to_act_on.is_some(), Capability::ElementTarget),
            (self.element_attribute_to_act_on.is_some(), Capability::ElementAttribute),
            (self.regular_expression.is_some(), Capability::Regex),
        ]
        .into_iter()
        .filter_map(|(present, capability)| present.then_some(capability))
        .collect()
    }
}

/// Flag name → description, in declared order.
///
/// Kept as a list rather than a map so declaration order survives
/// deserialization. Repeated names are preserved here and collapsed later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArguments(pub Vec<(String, String)>);

impl CliArguments {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, doc)| (name.as_str(), doc.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CliArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CliArguments(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl Serialize for CliArguments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, doc) in &self.0 {
            map.serialize_entry(name, doc)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CliArguments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = CliArguments;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping from flag name to description")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, doc)) = access.next_entry::<String, Option<String>>()? {
                    entries.push((name, doc.unwrap_or_default()));
                }
                Ok(CliArguments(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// A flat catalog entry that only contributes its literal name.
///
/// Accepts either a bare string or a `{ name: ... }` record on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NamedEntry")]
pub struct NamedDescriptor {
    pub name: String,
}

pub type LocatorDescriptor = NamedDescriptor;
pub type AttributeDescriptor = NamedDescriptor;

#[derive(Deserialize)]
#[serde(untagged)]
enum NamedEntry {
    Bare(String),
    Record { name: String },
}

impl From<NamedEntry> for NamedDescriptor {
    fn from(entry: NamedEntry) -> Self {
        match entry {
            NamedEntry::Bare(name) | NamedEntry::Record { name } => NamedDescriptor { name },
        }
    }
}

impl NamedDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ============================================================================
// Ingested descriptor
// ============================================================================

/// An action descriptor with its capability set resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub key: String,
    pub verb: String,

    /// Alternative literal names; empty when the record had none.
    pub aliases: Vec<String>,

    pub capabilities: CapabilitySet,
    pub cli_arguments: CliArguments,
    pub description: String,
    pub source: String,
}

impl ActionDescriptor {
    /// Ingest a wire record. Never fails: missing optional fields simply
    /// leave the matching capabilities unset.
    pub fn from_record(record: ActionRecord) -> Self {
        let mut capabilities = record
            .entity
            .as_ref()
            .and_then(|e| e.properties.as_ref())
            .map(PropertyBag::capabilities)
            .unwrap_or_default();

        if record.cli_arguments.is_some() {
            capabilities.insert(Capability::CliArguments);
        }

        let verb = record
            .verb
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| {
                to_phrase(&record.key)
                    .split(' ')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            });

        ActionDescriptor {
            key: record.key,
            verb,
            aliases: record.aliases.unwrap_or_default(),
            capabilities,
            cli_arguments: record.cli_arguments.unwrap_or_default(),
            description: record.description,
            source: record.source,
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities.contains(capability)
    }

    /// `ClickOnElement` → `click on element`
    pub fn base_phrase(&self) -> String {
        to_phrase(&self.key)
    }
}
