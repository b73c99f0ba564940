#![allow(dead_code)]

use action_snippets::catalog::catalog_model::{
    ActionRecord, CatalogDocument, CliArguments, EntityBag, NamedDescriptor, PropertyBag,
};
use action_snippets::catalog::snapshot::CatalogSnapshot;
use action_snippets::engine::config::{CompletionSettings, EngineConfig};
use serde_json::json;

pub fn engine_config() -> EngineConfig {
    EngineConfig::from_settings(&CompletionSettings::default()).unwrap()
}

/// An action record with no capabilities at all.
pub fn bare_action(key: &str) -> ActionRecord {
    ActionRecord {
        key: key.to_string(),
        description: format!("{} description", key),
        source: "core".to_string(),
        ..Default::default()
    }
}

pub fn with_properties(
    mut record: ActionRecord,
    element: bool,
    attribute: bool,
    regex: bool,
) -> ActionRecord {
    let present = |flag: bool| flag.then(|| json!({}));
    record.entity = Some(EntityBag {
        properties: Some(PropertyBag {
            argument: Some(json!({})),
            element_to_act_on: present(element),
            element_attribute_to_act_on: present(attribute),
            regular_expression: present(regex),
        }),
    });
    record
}

pub fn with_cli(mut record: ActionRecord, flags: &[(&str, &str)]) -> ActionRecord {
    record.cli_arguments = Some(flags.iter().copied().collect::<CliArguments>());
    record
}

pub fn document(actions: Vec<ActionRecord>) -> CatalogDocument {
    CatalogDocument {
        actions,
        locators: vec![
            NamedDescriptor::new("xpath"),
            NamedDescriptor::new("css"),
            NamedDescriptor::new("id"),
        ],
        attributes: vec![NamedDescriptor::new("href"), NamedDescriptor::new("class")],
    }
}

pub fn snapshot(actions: Vec<ActionRecord>) -> CatalogSnapshot {
    CatalogSnapshot::from_document(document(actions)).unwrap()
}

/// A small catalog covering every capability combination used in tests.
pub fn sample_snapshot() -> CatalogSnapshot {
    let mut click = with_properties(bare_action("ClickOn"), true, false, false);
    click.verb = Some("click".to_string());
    let click = with_cli(
        click,
        &[("timeout", "Seconds to wait"), ("retries", "Retry count")],
    );

    let mut read = with_properties(bare_action("ReadAttribute"), true, true, true);
    read.verb = Some("read".to_string());

    snapshot(vec![bare_action("Wait"), click, read])
}

pub const SAMPLE_CATALOG_JSON: &str = r#"{
  "actions": [
    {
      "key": "ClickOnElement",
      "verb": "click",
      "aliases": ["tapOn", "press"],
      "entity": { "properties": { "argument": {}, "elementToActOn": {} } },
      "cliArguments": { "timeout": "Seconds to wait", "force": "Ignore visibility" },
      "description": "Clicks an element",
      "source": "web"
    },
    {
      "key": "OpenBrowser",
      "description": "Opens a browser",
      "source": "web"
    }
  ],
  "locators": ["css", { "name": "xpath" }],
  "attributes": [{ "name": "title" }]
}"#;
