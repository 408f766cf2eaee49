//! Build profile
//!
//! A profile is the user-authored description of what to build: global
//! options, per-feature options, target architectures and the programs to
//! compile. It is validated once when loaded and afterwards only changes
//! through the mutators below, which enforce the gating rule: a feature's
//! sub-options can only be set while the feature itself is on.
//!
//! This module is organized into:
//! - [`value`]: typed option values and feature states
//! - [`views`]: computed, read-only projections (config options, packages, targets)
//! - [`serialization`]: YAML loading and saving in a fixed field order

pub mod serialization;
pub mod value;
pub mod views;


use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::Value;

use crate::catalog::{OptionCatalog, OptionKind};
use crate::error::{self, Result};
use crate::schema::{ProfileSchema, pointer::Pointer};

pub use value::{FeatureState, OptionValue};

pub const BF_PLATFORMS: &str = "bf-platforms";
pub const BSP_PATH: &str = "bsp-path";
pub const SWITCH: &str = "switch";
pub const SWITCH_PROFILE: &str = "profile";

/// Generates a getter/setter pair for a free-form global option
macro_rules! text_option_accessors {
    ($($getter:ident, $setter:ident => $name:expr;)+) => {
        $(
            #[doc = concat!("Value of the `", $name, "` global option")]
            pub fn $getter(&self) -> Option<&str> {
                self.global_options.get($name).and_then(OptionValue::as_text)
            }

            #[doc = concat!("Set the `", $name, "` global option")]
            pub fn $setter(&mut self, value: impl Into<String>) -> Result<()> {
                self.set_option($name, OptionValue::Text(value.into()))
            }
        )+
    };
}

/// In-memory build profile bound to the catalog it was validated against
#[derive(Debug, Clone)]
pub struct Profile<'c> {
    catalog: &'c OptionCatalog,
    global_options: BTreeMap<String, OptionValue>,
    features: BTreeMap<String, FeatureState>,
    p4_examples: Option<Vec<String>>,
    architectures: Vec<String>,
    source_packages: Option<Vec<String>>,
}

impl<'c> Profile<'c> {
    /// Create an empty profile
    pub fn new(catalog: &'c OptionCatalog) -> Self {
        Self {
            catalog,
            global_options: BTreeMap::new(),
            features: BTreeMap::new(),
            p4_examples: None,
            architectures: Vec::new(),
            source_packages: None,
        }
    }

    /// Parse and validate a profile from YAML
    pub fn from_yaml(catalog: &'c OptionCatalog, yaml: &str) -> Result<Self> {
        let document: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(catalog, &document)
    }

    /// Validate a parsed document and copy it into a profile
    pub fn from_value(catalog: &'c OptionCatalog, document: &Value) -> Result<Self> {
        ProfileSchema::new(catalog).validate(document)?;
        serialization::from_document(catalog, document)
    }

    /// Load a profile file
    pub fn load(catalog: &'c OptionCatalog, path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))?;
        let profile = Self::from_yaml(catalog, &yaml)?;
        tracing::debug!(path = %path.display(), "profile loaded");
        Ok(profile)
    }

    pub fn catalog(&self) -> &'c OptionCatalog {
        self.catalog
    }

    /// Set an option, dispatching on where the option lives
    ///
    /// Sub-options fail with a gating error while their feature is off; the
    /// profile is left untouched in that case.
    pub fn set_option(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<()> {
        let value = value.into();
        let catalog = self.catalog;
        let def = catalog.definition(name)?;

        if value.kind() != def.value_kind {
            return Err(error::value_mismatch(name, def.value_kind.to_string()));
        }

        tracing::debug!(option = name, value = ?value, "setting option");

        match &def.kind {
            OptionKind::Global => {
                self.global_options.insert(name.to_string(), value);
            }
            OptionKind::Architecture => {
                if value.is_truthy() {
                    if !self.architectures.iter().any(|a| a == name) {
                        self.architectures.push(name.to_string());
                    }
                } else {
                    self.architectures.retain(|a| a != name);
                }
            }
            OptionKind::Feature => {
                if value.is_truthy() {
                    let state = self
                        .features
                        .entry(name.to_string())
                        .or_insert(FeatureState::On);
                    if !state.has_settings() {
                        *state = FeatureState::Settings(BTreeMap::new());
                    }
                } else {
                    self.features.insert(name.to_string(), FeatureState::Off);
                }
            }
            OptionKind::FeatureChild { parent } => {
                if !self.is_option_modifiable(name)? {
                    return Err(error::gating(name, parent));
                }
                self.feature_settings_mut(parent)
                    .insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Whether `set_option` may change this option right now
    ///
    /// Defining options are always settable; sub-options only while their
    /// feature is on.
    pub fn is_option_modifiable(&self, name: &str) -> Result<bool> {
        let def = self.catalog.definition(name)?;
        Ok(match &def.kind {
            OptionKind::FeatureChild { parent } => self
                .features
                .get(parent)
                .is_some_and(FeatureState::is_enabled),
            OptionKind::Global | OptionKind::Architecture | OptionKind::Feature => true,
        })
    }

    pub fn enable(&mut self, name: &str) -> Result<()> {
        self.set_option(name, true)
    }

    pub fn disable(&mut self, name: &str) -> Result<()> {
        self.set_option(name, false)
    }

    /// Append a program to `features/p4-examples`
    pub fn add_p4_program(&mut self, name: impl Into<String>) {
        self.p4_examples.get_or_insert_with(Vec::new).push(name.into());
    }

    /// Pin the source packages to an empty list
    pub fn skip_dependencies(&mut self) {
        self.source_packages = Some(Vec::new());
    }

    /// BSP location, `features/bf-platforms/bsp-path`
    pub fn bsp_path(&self) -> Option<&str> {
        self.feature_setting(BF_PLATFORMS, BSP_PATH)
    }

    /// Set the BSP location, turning `bf-platforms` on first
    pub fn set_bsp_path(&mut self, path: impl Into<String>) -> Result<()> {
        self.set_option(BF_PLATFORMS, true)?;
        self.set_feature_setting(BF_PLATFORMS, BSP_PATH, path.into())
    }

    /// Switch profile name, `features/switch/profile`
    pub fn switch_profile(&self) -> Option<&str> {
        self.feature_setting(SWITCH, SWITCH_PROFILE)
    }

    /// Set the switch profile; a switch profile implies the switch feature
    pub fn set_switch_profile(&mut self, name: impl Into<String>) -> Result<()> {
        self.set_option(SWITCH, true)?;
        self.set_feature_setting(SWITCH, SWITCH_PROFILE, name.into())
    }

    text_option_accessors! {
        p4ppflags, set_p4ppflags => "p4ppflags";
        p4flags, set_p4flags => "p4flags";
        extra_cppflags, set_extra_cppflags => "extra-cppflags";
        kdir, set_kdir => "kdir";
    }

    fn feature_setting(&self, feature: &str, key: &str) -> Option<&str> {
        self.features
            .get(feature)
            .and_then(FeatureState::settings)
            .and_then(|map| map.get(key))
            .and_then(OptionValue::as_text)
    }

    fn set_feature_setting(&mut self, feature: &str, key: &str, value: String) -> Result<()> {
        if !self.catalog.settings(feature).iter().any(|s| s == key) {
            let at = Pointer::root()
                .child(crate::schema::FEATURES)
                .child(feature)
                .child(key);
            return Err(error::validation(
                at.to_string(),
                format!("'{key}' is not an option of feature '{feature}'"),
            ));
        }
        self.feature_settings_mut(feature)
            .insert(key.to_string(), OptionValue::Text(value));
        Ok(())
    }

    /// Settings map of a feature, coercing a bare `true` or absent entry to `{}`
    fn feature_settings_mut(&mut self, feature: &str) -> &mut BTreeMap<String, OptionValue> {
        self.features
            .entry(feature.to_string())
            .or_insert(FeatureState::Off)
            .settings_mut()
    }
}
