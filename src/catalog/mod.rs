//! Option catalog
//!
//! This module provides:
//! - The set of known option definitions, in declaration order
//! - Lookup by name and classification by [`OptionKind`]
//! - Conversion between command-line tokens (`opt`, `^opt`) and options
//!
//! One catalog is built at process start and passed by reference to
//! profiles and plans. It is read-only after construction.

pub mod definition;
pub mod loader;
pub mod token;

use std::collections::{HashMap, HashSet};
use std::path::Path;

pub use definition::{OptionDefinition, OptionKind, ValueKind};

use crate::error::{self, Result};

/// Registry of all known options
#[derive(Debug, Clone)]
pub struct OptionCatalog {
    definitions: Vec<OptionDefinition>,
    by_name: HashMap<String, usize>,
    settings: HashMap<String, Vec<String>>,
}

impl OptionCatalog {
    /// Create a catalog from definitions in declaration order
    ///
    /// Fails if two definitions share a name or a feature child points at a
    /// parent that is not a declared feature.
    pub fn new(definitions: Vec<OptionDefinition>) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(definitions.len());
        for (idx, def) in definitions.iter().enumerate() {
            if by_name.insert(def.name.clone(), idx).is_some() {
                return Err(error::catalog_invalid(format!(
                    "duplicate option '{}'",
                    def.name
                )));
            }
        }

        for def in &definitions {
            if let OptionKind::FeatureChild { parent } = &def.kind {
                let parent_is_feature = by_name
                    .get(parent)
                    .is_some_and(|&idx| definitions[idx].defines_category());
                if !parent_is_feature {
                    return Err(error::catalog_invalid(format!(
                        "option '{}' belongs to unknown feature '{}'",
                        def.name, parent
                    )));
                }
            }
        }

        Ok(Self {
            definitions,
            by_name,
            settings: HashMap::new(),
        })
    }

    /// Declare informational, non-option keys allowed inside a feature map
    pub fn with_settings(mut self, feature: &str, keys: Vec<String>) -> Result<Self> {
        if !self.get(feature).is_some_and(OptionDefinition::defines_category) {
            return Err(error::catalog_invalid(format!(
                "settings declared for unknown feature '{feature}'"
            )));
        }
        if let Some(clash) = keys.iter().find(|key| self.is_known(key)) {
            return Err(error::catalog_invalid(format!(
                "setting '{clash}' of feature '{feature}' clashes with an option name"
            )));
        }
        self.settings.insert(feature.to_string(), keys);
        Ok(self)
    }

    /// Parse a catalog from its YAML document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let parsed = loader::parse(yaml)?;
        let mut catalog = Self::new(parsed.definitions)?;
        for (feature, keys) in parsed.settings {
            catalog = catalog.with_settings(&feature, keys)?;
        }
        tracing::debug!(options = catalog.definitions.len(), "option catalog loaded");
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(loader::BUILTIN_CATALOG)
    }

    /// Load a catalog from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml)
    }

    /// Look up a definition, failing if the option is unknown
    pub fn definition(&self, name: &str) -> Result<&OptionDefinition> {
        self.get(name).ok_or_else(|| error::unknown_option(name))
    }

    pub fn get(&self, name: &str) -> Option<&OptionDefinition> {
        self.by_name
            .get(name)
            .and_then(|&idx| self.definitions.get(idx))
    }

    /// All definitions in declaration order
    pub fn definitions(&self) -> &[OptionDefinition] {
        &self.definitions
    }

    /// Names of every known option
    ///
    /// Used to tell real options apart from informational keys nested in a
    /// feature map.
    pub fn known_option_names(&self) -> HashSet<&str> {
        self.definitions.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn globals(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.of_kind(|kind| *kind == OptionKind::Global)
    }

    pub fn architectures(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.of_kind(|kind| *kind == OptionKind::Architecture)
    }

    /// Feature-defining options
    pub fn features(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.of_kind(|kind| *kind == OptionKind::Feature)
    }

    /// Sub-options of a feature, in declaration order
    pub fn children<'a>(&'a self, feature: &'a str) -> impl Iterator<Item = &'a OptionDefinition> {
        self.definitions.iter().filter(move |d| {
            matches!(&d.kind, OptionKind::FeatureChild { parent } if parent == feature)
        })
    }

    /// Informational keys allowed in a feature map
    pub fn settings(&self, feature: &str) -> &[String] {
        self.settings
            .get(feature)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Default value of every toggle option, in declaration order
    pub fn default_options(&self) -> Vec<(&str, bool)> {
        self.definitions
            .iter()
            .filter(|d| d.is_toggle())
            .map(|d| (d.name.as_str(), d.default))
            .collect()
    }

    fn of_kind(&self, pred: impl Fn(&OptionKind) -> bool) -> impl Iterator<Item = &OptionDefinition> {
        self.definitions.iter().filter(move |d| pred(&d.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    fn builtin() -> OptionCatalog {
        OptionCatalog::builtin().unwrap()
    }

    #[test]
    fn test_definition_lookup() {
        let catalog = builtin();
        let def = catalog.definition("thrift-switch").unwrap();
        assert_eq!(def.category(), "switch");
        assert!(def.default);
    }

    #[test]
    fn test_definition_unknown() {
        let catalog = builtin();
        let result = catalog.definition("warp-drive");
        assert!(matches!(result, Err(ProfileError::UnknownOption { .. })));
    }

    #[test]
    fn test_known_option_names_excludes_settings() {
        let catalog = builtin();
        let names = catalog.known_option_names();
        assert!(names.contains("switch"));
        assert!(names.contains("tofino"));
        assert!(!names.contains("profile"));
        assert!(!names.contains("bsp-path"));
        assert!(!names.contains("p4-examples"));
    }

    #[test]
    fn test_settings_per_feature() {
        let catalog = builtin();
        assert_eq!(catalog.settings("switch"), &["profile".to_string()]);
        assert_eq!(catalog.settings("bf-platforms"), &["bsp-path".to_string()]);
        assert!(catalog.settings("grpc").is_empty());
    }

    #[test]
    fn test_children_in_declaration_order() {
        let catalog = builtin();
        let children: Vec<&str> = catalog
            .children("bf-platforms")
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(children, vec!["newport", "accton-diags", "tclonly"]);
    }

    #[test]
    fn test_default_options_skip_text() {
        let catalog = builtin();
        let defaults = catalog.default_options();
        assert!(defaults.contains(&("tofino", true)));
        assert!(defaults.contains(&("grpc", false)));
        assert!(!defaults.iter().any(|(name, _)| *name == "p4ppflags"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = OptionCatalog::new(vec![
            OptionDefinition::global("asan", false),
            OptionDefinition::architecture("asan", false),
        ]);
        assert!(matches!(result, Err(ProfileError::CatalogInvalid { .. })));
    }

    #[test]
    fn test_orphan_child_rejected() {
        let result = OptionCatalog::new(vec![OptionDefinition::child("sai", "switch", false)]);
        assert!(matches!(result, Err(ProfileError::CatalogInvalid { .. })));
    }

    #[test]
    fn test_setting_clashing_with_option_rejected() {
        let catalog = OptionCatalog::new(vec![
            OptionDefinition::feature("switch", false),
            OptionDefinition::child("sai", "switch", false),
        ])
        .unwrap();
        let result = catalog.with_settings("switch", vec!["sai".to_string()]);
        assert!(matches!(result, Err(ProfileError::CatalogInvalid { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("options.yaml");
        std::fs::write(&path, "global:\n  - name: asan\n").unwrap();
        let catalog = OptionCatalog::load(&path).unwrap();
        assert_eq!(catalog.definitions().len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = OptionCatalog::load(Path::new("/nonexistent/options.yaml"));
        assert!(matches!(result, Err(ProfileError::FileReadFailed { .. })));
    }
}
