//! Typed values stored in a profile document

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::ValueKind;

/// A scalar option value: a toggle or a free-form string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Text(String),
}

impl OptionValue {
    /// `Bool(b)` is `b`; text is truthy when non-empty
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(enabled) => *enabled,
            OptionValue::Text(text) => !text.is_empty(),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            OptionValue::Bool(_) => ValueKind::Toggle,
            OptionValue::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(text) => Some(text),
            OptionValue::Bool(_) => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

/// State of a feature entry under `features`
///
/// Mirrors the three shapes a feature takes in YAML: `false`, `true`, or a map
/// of sub-options and informational settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureState {
    Off,
    On,
    Settings(BTreeMap<String, OptionValue>),
}

impl FeatureState {
    /// Sub-options may only be set while the feature is on
    pub fn is_enabled(&self) -> bool {
        !matches!(self, FeatureState::Off)
    }

    pub fn settings(&self) -> Option<&BTreeMap<String, OptionValue>> {
        match self {
            FeatureState::Settings(map) => Some(map),
            FeatureState::Off | FeatureState::On => None,
        }
    }

    pub fn has_settings(&self) -> bool {
        self.settings().is_some_and(|map| !map.is_empty())
    }

    /// Settings map, turning a bare `true`/`false` into an empty one first
    pub fn settings_mut(&mut self) -> &mut BTreeMap<String, OptionValue> {
        match self {
            FeatureState::Settings(map) => map,
            FeatureState::Off | FeatureState::On => {
                *self = FeatureState::Settings(BTreeMap::new());
                self.settings_mut()
            }
        }
    }
}
