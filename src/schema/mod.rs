//! Profile document schema
//!
//! The schema is derived from an [`OptionCatalog`]: which keys may appear under
//! `global-options`, which features exist and what their maps may contain,
//! which architectures are known. Validation walks a parsed YAML document and
//! reports the first violation with the JSON pointer of the offending value.

pub mod json;
pub mod pointer;

use std::collections::{HashMap, HashSet};

use serde_yaml::{Mapping, Value};

use crate::catalog::{OptionCatalog, ValueKind};
use crate::error::{self, Result};
use pointer::Pointer;

pub const GLOBAL_OPTIONS: &str = "global-options";
pub const FEATURES: &str = "features";
pub const ARCHITECTURES: &str = "architectures";
pub const DEPENDENCIES: &str = "dependencies";
pub const SOURCE_PACKAGES: &str = "source-packages";
/// Program list kept under `features`; not an option and never gated
pub const P4_EXAMPLES: &str = "p4-examples";

/// Rules for one feature map
#[derive(Debug, Clone)]
struct FeatureRule {
    name: String,
    children: Vec<String>,
    settings: Vec<String>,
}

/// Validation schema for profile documents
#[derive(Debug, Clone)]
pub struct ProfileSchema {
    globals: Vec<(String, ValueKind)>,
    architectures: Vec<String>,
    features: Vec<FeatureRule>,
    known_options: HashSet<String>,
    defaults: HashMap<String, bool>,
}

impl ProfileSchema {
    /// Derive the schema from a catalog
    pub fn new(catalog: &OptionCatalog) -> Self {
        let globals = catalog
            .globals()
            .map(|d| (d.name.clone(), d.value_kind))
            .collect();
        let architectures = catalog.architectures().map(|d| d.name.clone()).collect();
        let features = catalog
            .features()
            .map(|d| FeatureRule {
                name: d.name.clone(),
                children: catalog.children(&d.name).map(|c| c.name.clone()).collect(),
                settings: catalog.settings(&d.name).to_vec(),
            })
            .collect();
        let known_options = catalog
            .known_option_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let defaults = catalog
            .default_options()
            .into_iter()
            .map(|(name, default)| (name.to_string(), default))
            .collect();

        Self {
            globals,
            architectures,
            features,
            known_options,
            defaults,
        }
    }

    /// Validate a parsed document
    pub fn validate(&self, document: &Value) -> Result<()> {
        let root = Pointer::root();
        let mapping = expect_mapping(document, &root)?;

        for (key, value) in mapping {
            let key = expect_key(key, &root)?;
            let at = root.child(key);
            match key {
                GLOBAL_OPTIONS => self.validate_globals(value, &at)?,
                FEATURES => self.validate_features(value, &at)?,
                ARCHITECTURES => self.validate_architectures(value, &at)?,
                DEPENDENCIES => validate_dependencies(value, &at)?,
                other => return Err(violation(&at, format!("unexpected key '{other}'"))),
            }
        }
        Ok(())
    }

    fn validate_globals(&self, value: &Value, at: &Pointer) -> Result<()> {
        for (key, value) in expect_mapping(value, at)? {
            let name = expect_key(key, at)?;
            let option_at = at.child(name);
            let Some((_, kind)) = self.globals.iter().find(|(n, _)| n == name) else {
                return Err(violation(
                    &option_at,
                    format!("'{name}' is not a global option"),
                ));
            };
            match kind {
                ValueKind::Toggle => expect_bool(value, &option_at)?,
                ValueKind::Text => expect_string(value, &option_at)?,
            }
        }
        Ok(())
    }

    fn validate_features(&self, value: &Value, at: &Pointer) -> Result<()> {
        for (key, value) in expect_mapping(value, at)? {
            let name = expect_key(key, at)?;
            let feature_at = at.child(name);

            if name == P4_EXAMPLES {
                expect_string_list(value, &feature_at)?;
                continue;
            }

            let Some(rule) = self.features.iter().find(|f| f.name == name) else {
                let message = if self.known_options.contains(name) {
                    format!("option '{name}' is not a feature")
                } else {
                    format!("'{name}' is not a known feature")
                };
                return Err(violation(&feature_at, message));
            };

            match value {
                Value::Bool(_) => {}
                Value::Mapping(settings) => validate_feature_map(rule, settings, &feature_at)?,
                other => {
                    return Err(violation(
                        &feature_at,
                        format!("expected a boolean or a mapping, found {}", type_name(other)),
                    ));
                }
            }
        }
        Ok(())
    }

    fn validate_architectures(&self, value: &Value, at: &Pointer) -> Result<()> {
        let Value::Sequence(items) = value else {
            return Err(violation(
                at,
                format!("expected a sequence, found {}", type_name(value)),
            ));
        };

        let mut seen = HashSet::new();
        for (idx, item) in items.iter().enumerate() {
            let item_at = at.child(idx);
            let Value::String(name) = item else {
                return Err(violation(
                    &item_at,
                    format!("expected a string, found {}", type_name(item)),
                ));
            };
            if !self.architectures.contains(name) {
                return Err(violation(
                    &item_at,
                    format!("'{name}' is not a known architecture"),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(violation(&item_at, format!("duplicate architecture '{name}'")));
            }
        }
        Ok(())
    }

    pub(crate) fn global_names(&self) -> impl Iterator<Item = (&str, ValueKind)> {
        self.globals.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    /// Catalog default of a toggle option
    pub(crate) fn default_of(&self, name: &str) -> Option<bool> {
        self.defaults.get(name).copied()
    }

    pub(crate) fn architecture_names(&self) -> impl Iterator<Item = &str> {
        self.architectures.iter().map(String::as_str)
    }

    pub(crate) fn feature_rules(&self) -> impl Iterator<Item = (&str, &[String], &[String])> {
        self.features
            .iter()
            .map(|f| (f.name.as_str(), f.children.as_slice(), f.settings.as_slice()))
    }
}

fn validate_feature_map(rule: &FeatureRule, settings: &Mapping, at: &Pointer) -> Result<()> {
    for (key, value) in settings {
        let key = expect_key(key, at)?;
        let key_at = at.child(key);
        if rule.children.iter().any(|c| c == key) {
            expect_bool(value, &key_at)?;
        } else if rule.settings.iter().any(|s| s == key) {
            expect_string(value, &key_at)?;
        } else {
            return Err(violation(
                &key_at,
                format!("'{key}' is not an option of feature '{}'", rule.name),
            ));
        }
    }
    Ok(())
}

fn validate_dependencies(value: &Value, at: &Pointer) -> Result<()> {
    for (key, value) in expect_mapping(value, at)? {
        let key = expect_key(key, at)?;
        let key_at = at.child(key);
        if key != SOURCE_PACKAGES {
            return Err(violation(&key_at, format!("unexpected key '{key}'")));
        }
        expect_string_list(value, &key_at)?;
    }
    Ok(())
}

fn expect_mapping<'v>(value: &'v Value, at: &Pointer) -> Result<&'v Mapping> {
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(violation(
            at,
            format!("expected a mapping, found {}", type_name(other)),
        )),
    }
}

fn expect_key<'v>(key: &'v Value, at: &Pointer) -> Result<&'v str> {
    match key {
        Value::String(key) => Ok(key),
        other => Err(violation(
            at,
            format!("keys must be strings, found {}", type_name(other)),
        )),
    }
}

fn expect_bool(value: &Value, at: &Pointer) -> Result<()> {
    match value {
        Value::Bool(_) => Ok(()),
        other => Err(violation(
            at,
            format!("expected a boolean, found {}", type_name(other)),
        )),
    }
}

fn expect_string(value: &Value, at: &Pointer) -> Result<()> {
    match value {
        Value::String(_) => Ok(()),
        other => Err(violation(
            at,
            format!("expected a string, found {}", type_name(other)),
        )),
    }
}

fn expect_string_list(value: &Value, at: &Pointer) -> Result<()> {
    let Value::Sequence(items) = value else {
        return Err(violation(
            at,
            format!("expected a sequence, found {}", type_name(value)),
        ));
    };
    for (idx, item) in items.iter().enumerate() {
        expect_string(item, &at.child(idx))?;
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn violation(at: &Pointer, message: String) -> crate::error::ProfileError {
    error::validation(at.to_string(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    fn schema() -> ProfileSchema {
        let catalog = OptionCatalog::builtin().unwrap();
        ProfileSchema::new(&catalog)
    }

    fn validate(yaml: &str) -> Result<()> {
        let document: Value = serde_yaml::from_str(yaml).unwrap();
        schema().validate(&document)
    }

    fn violation_path(yaml: &str) -> String {
        match validate(yaml) {
            Err(ProfileError::Validation { path, .. }) => path,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_document() {
        let yaml = r"
global-options:
  asan: true
  p4ppflags: -DFOO
features:
  switch:
    profile: x1_tofino
    thrift-switch: true
  bf-diags: false
  thrift-driver: true
  p4-examples:
    - tna_exact_match
architectures:
  - tofino
  - tofino2
dependencies:
  source-packages: [bridge, libcli]
";
        assert!(validate(yaml).is_ok());
    }

    #[test]
    fn test_empty_mapping_is_valid() {
        assert!(validate("{}").is_ok());
    }

    #[test]
    fn test_root_must_be_mapping() {
        assert_eq!(violation_path("- tofino"), "/");
    }

    #[test]
    fn test_unexpected_top_level_key() {
        assert_eq!(violation_path("programs: []"), "/programs");
    }

    #[test]
    fn test_unknown_global_option() {
        assert_eq!(
            violation_path("global-options:\n  warp-drive: true\n"),
            "/global-options/warp-drive"
        );
    }

    #[test]
    fn test_feature_option_under_globals_rejected() {
        assert_eq!(
            violation_path("global-options:\n  switch: true\n"),
            "/global-options/switch"
        );
    }

    #[test]
    fn test_text_option_requires_string() {
        assert_eq!(
            violation_path("global-options:\n  kdir: true\n"),
            "/global-options/kdir"
        );
        assert_eq!(
            violation_path("global-options:\n  asan: yes-please\n"),
            "/global-options/asan"
        );
    }

    #[test]
    fn test_sub_option_outside_its_feature() {
        let result = validate("features:\n  switch:\n    thrift-diags: true\n");
        match result {
            Err(ProfileError::Validation { path, message }) => {
                assert_eq!(path, "/features/switch/thrift-diags");
                assert!(message.contains("not an option of feature 'switch'"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_child_option_as_feature_rejected() {
        let result = validate("features:\n  sai: true\n");
        match result {
            Err(ProfileError::Validation { message, .. }) => {
                assert!(message.contains("is not a feature"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_feature_value_type() {
        assert_eq!(
            violation_path("features:\n  switch: [sai]\n"),
            "/features/switch"
        );
    }

    #[test]
    fn test_setting_requires_string() {
        assert_eq!(
            violation_path("features:\n  switch:\n    profile: true\n"),
            "/features/switch/profile"
        );
    }

    #[test]
    fn test_p4_examples_must_be_strings() {
        assert_eq!(
            violation_path("features:\n  p4-examples: [tna_counter, 7]\n"),
            "/features/p4-examples/1"
        );
    }

    #[test]
    fn test_unknown_architecture() {
        assert_eq!(
            violation_path("architectures: [tofino, tofino9]\n"),
            "/architectures/1"
        );
    }

    #[test]
    fn test_duplicate_architecture() {
        let result = validate("architectures: [tofino, tofino]\n");
        match result {
            Err(ProfileError::Validation { path, message }) => {
                assert_eq!(path, "/architectures/1");
                assert!(message.contains("duplicate"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_dependencies_keys() {
        assert_eq!(
            violation_path("dependencies:\n  binary-packages: []\n"),
            "/dependencies/binary-packages"
        );
        assert_eq!(
            violation_path("dependencies:\n  source-packages: bridge\n"),
            "/dependencies/source-packages"
        );
    }

    #[test]
    fn test_null_section_rejected() {
        assert_eq!(violation_path("features:\n"), "/features");
    }
}
