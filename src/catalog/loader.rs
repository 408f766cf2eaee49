//! Catalog document parsing (options.yaml)

use serde::Deserialize;

use super::definition::OptionDefinition;
use crate::error::{self, Result};

/// The catalog compiled into the binary
pub const BUILTIN_CATALOG: &str = include_str!("options.yaml");

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    global: Vec<OptionEntry>,
    #[serde(default)]
    architectures: Vec<OptionEntry>,
    #[serde(default)]
    features: Vec<FeatureEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct OptionEntry {
    name: String,
    #[serde(default)]
    default: bool,
    #[serde(default = "default_can_be_disabled")]
    can_be_disabled: bool,
    #[serde(default)]
    kind: EntryKind,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct FeatureEntry {
    name: String,
    #[serde(default)]
    default: bool,
    #[serde(default = "default_can_be_disabled")]
    can_be_disabled: bool,
    #[serde(default)]
    settings: Vec<String>,
    #[serde(default)]
    options: Vec<OptionEntry>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum EntryKind {
    #[default]
    Toggle,
    Text,
}

fn default_can_be_disabled() -> bool {
    true
}

/// Flattened result of parsing a catalog document
pub struct ParsedCatalog {
    /// Definitions in declaration order
    pub definitions: Vec<OptionDefinition>,
    /// Informational keys per feature, e.g. `switch -> [profile]`
    pub settings: Vec<(String, Vec<String>)>,
}

/// Parse a catalog document into definitions in declaration order
pub fn parse(yaml: &str) -> Result<ParsedCatalog> {
    let document: CatalogDocument =
        serde_yaml::from_str(yaml).map_err(|e| error::catalog_invalid(e.to_string()))?;

    let mut definitions = Vec::new();
    let mut settings = Vec::new();

    for entry in document.global {
        let mut def = finish(
            OptionDefinition::global(&entry.name, entry.default),
            entry.can_be_disabled,
        );
        if entry.kind == EntryKind::Text {
            def = def.with_text_value();
        }
        definitions.push(def);
    }

    for entry in document.architectures {
        reject_text(&entry)?;
        definitions.push(finish(
            OptionDefinition::architecture(&entry.name, entry.default),
            entry.can_be_disabled,
        ));
    }

    for feature in document.features {
        definitions.push(finish(
            OptionDefinition::feature(&feature.name, feature.default),
            feature.can_be_disabled,
        ));
        for entry in feature.options {
            reject_text(&entry)?;
            definitions.push(finish(
                OptionDefinition::child(&entry.name, &feature.name, entry.default),
                entry.can_be_disabled,
            ));
        }
        if !feature.settings.is_empty() {
            settings.push((feature.name, feature.settings));
        }
    }

    Ok(ParsedCatalog {
        definitions,
        settings,
    })
}

fn finish(def: OptionDefinition, can_be_disabled: bool) -> OptionDefinition {
    if can_be_disabled { def } else { def.mandatory() }
}

fn reject_text(entry: &OptionEntry) -> Result<()> {
    if entry.kind == EntryKind::Text {
        return Err(error::catalog_invalid(format!(
            "option '{}' is a text option outside the global category",
            entry.name
        )));
    }
    Ok(())
}
