//! Option definitions
//!
//! A definition is immutable once the catalog is loaded. Its [`OptionKind`] is
//! computed at load time so mutations dispatch on a closed set of variants.

use std::fmt;

/// Category name shared by all global options
pub const GLOBAL_CATEGORY: &str = "global";

/// Category name shared by all architecture options
pub const ARCHITECTURE_CATEGORY: &str = "architecture";

/// Where an option lives in a profile and which gating applies to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    /// Stored under `global-options`, never gated
    Global,
    /// Stored in the `architectures` list
    Architecture,
    /// Defines a feature; its name is also its category
    Feature,
    /// Sub-option of a feature, settable only while the parent is on
    FeatureChild { parent: String },
}

/// Type of value an option holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Boolean on/off switch
    #[default]
    Toggle,
    /// Free-form string (compiler flags, kernel directory)
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Toggle => write!(f, "boolean"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

/// A single known option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    /// Unique, stable identifier
    pub name: String,
    pub kind: OptionKind,
    pub value_kind: ValueKind,
    /// Value assumed when a profile does not mention the option
    pub default: bool,
    pub can_be_disabled: bool,
}

impl OptionDefinition {
    pub fn global(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, OptionKind::Global, default)
    }

    pub fn architecture(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, OptionKind::Architecture, default)
    }

    pub fn feature(name: impl Into<String>, default: bool) -> Self {
        Self::new(name, OptionKind::Feature, default)
    }

    pub fn child(name: impl Into<String>, parent: impl Into<String>, default: bool) -> Self {
        Self::new(
            name,
            OptionKind::FeatureChild {
                parent: parent.into(),
            },
            default,
        )
    }

    fn new(name: impl Into<String>, kind: OptionKind, default: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            value_kind: ValueKind::Toggle,
            default,
            can_be_disabled: true,
        }
    }

    /// Mark the option as holding free-form text
    pub fn with_text_value(mut self) -> Self {
        self.value_kind = ValueKind::Text;
        self
    }

    /// Mark the option as impossible to disable from a token
    pub fn mandatory(mut self) -> Self {
        self.can_be_disabled = false;
        self
    }

    /// Grouping key: `global`, `architecture`, or the feature name
    pub fn category(&self) -> &str {
        match &self.kind {
            OptionKind::Global => GLOBAL_CATEGORY,
            OptionKind::Architecture => ARCHITECTURE_CATEGORY,
            OptionKind::Feature => &self.name,
            OptionKind::FeatureChild { parent } => parent,
        }
    }

    /// True when this option is the defining option of a feature
    pub fn defines_category(&self) -> bool {
        self.kind == OptionKind::Feature
    }

    pub fn is_toggle(&self) -> bool {
        self.value_kind == ValueKind::Toggle
    }
}
