//! Serialization implementations for Profile
//!
//! Loading goes through the schema first, so the raw shapes below only need
//! to tell booleans, program lists and maps apart. Saving emits sections in
//! a fixed order and keys in catalog declaration order, independent of the
//! order in which options were set.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_yaml::Value;

use super::{FeatureState, OptionValue, Profile};
use crate::catalog::OptionCatalog;
use crate::error::{self, Result};
use crate::schema::{
    ARCHITECTURES, DEPENDENCIES, FEATURES, GLOBAL_OPTIONS, P4_EXAMPLES, SOURCE_PACKAGES,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawProfile {
    #[serde(default)]
    global_options: BTreeMap<String, OptionValue>,
    #[serde(default)]
    features: BTreeMap<String, RawFeature>,
    #[serde(default)]
    architectures: Vec<String>,
    #[serde(default)]
    dependencies: Option<RawDependencies>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFeature {
    Toggle(bool),
    Programs(Vec<String>),
    Settings(BTreeMap<String, OptionValue>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawDependencies {
    #[serde(default)]
    source_packages: Option<Vec<String>>,
}

/// Copy a schema-validated document into a profile
pub(super) fn from_document<'c>(catalog: &'c OptionCatalog, document: &Value) -> Result<Profile<'c>> {
    let raw: RawProfile = serde_yaml::from_value(document.clone())
        .map_err(|e| error::validation("/", e.to_string()))?;

    let mut profile = Profile::new(catalog);
    profile.global_options = raw.global_options;
    profile.architectures = raw.architectures;
    profile.source_packages = raw.dependencies.and_then(|d| d.source_packages);

    for (name, feature) in raw.features {
        if name == P4_EXAMPLES {
            let RawFeature::Programs(programs) = feature else {
                return Err(error::validation(
                    format!("/{FEATURES}/{P4_EXAMPLES}"),
                    "expected a sequence of program names",
                ));
            };
            profile.p4_examples = Some(programs);
            continue;
        }

        let state = match feature {
            RawFeature::Toggle(false) => FeatureState::Off,
            RawFeature::Toggle(true) => FeatureState::On,
            RawFeature::Settings(map) => FeatureState::Settings(map),
            RawFeature::Programs(_) => {
                return Err(error::validation(
                    format!("/{FEATURES}/{name}"),
                    "expected a boolean or a mapping, found sequence",
                ));
            }
        };
        profile.features.insert(name, state);
    }

    Ok(profile)
}

impl Profile<'_> {
    /// Render the profile as YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the profile to a file, replacing it atomically
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let write_failed = |e: &dyn std::fmt::Display| {
            error::file_write_failed(path.display().to_string(), e.to_string())
        };

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(|e| write_failed(&e))?;
        file.write_all(yaml.as_bytes()).map_err(|e| write_failed(&e))?;
        #[cfg(unix)]
        file.as_file()
            .set_permissions(target_permissions(path))
            .map_err(|e| write_failed(&e))?;
        file.persist(path).map_err(|e| write_failed(&e.error))?;

        tracing::debug!(path = %path.display(), "profile saved");
        Ok(())
    }
}

/// Mode for a saved profile: the replaced file's, else `0644`
///
/// `NamedTempFile` creates its file `0600`, which would otherwise survive
/// the rename.
#[cfg(unix)]
fn target_permissions(path: &Path) -> std::fs::Permissions {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.permissions())
        .unwrap_or_else(|_| std::fs::Permissions::from_mode(0o644))
}

impl Serialize for Profile<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let field_count = 3 + usize::from(self.source_packages.is_some());
        let mut state = serializer.serialize_struct("Profile", field_count)?;

        state.serialize_field(GLOBAL_OPTIONS, &GlobalOptions(self))?;
        state.serialize_field(FEATURES, &Features(self))?;
        state.serialize_field(ARCHITECTURES, &Architectures(self))?;
        if let Some(packages) = &self.source_packages {
            state.serialize_field(DEPENDENCIES, &Dependencies { packages })?;
        }
        state.end()
    }
}

/// `global-options` in catalog order
struct GlobalOptions<'p, 'c>(&'p Profile<'c>);

impl Serialize for GlobalOptions<'_, '_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let profile = self.0;
        let mut map = serializer.serialize_map(Some(profile.global_options.len()))?;
        for def in profile.catalog.globals() {
            if let Some(value) = profile.global_options.get(&def.name) {
                map.serialize_entry(&def.name, value)?;
            }
        }
        map.end()
    }
}

/// `features` in catalog order, `p4-examples` last
struct Features<'p, 'c>(&'p Profile<'c>);

impl Serialize for Features<'_, '_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let profile = self.0;
        let len = profile.features.len() + usize::from(profile.p4_examples.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for def in profile.catalog.features() {
            if let Some(state) = profile.features.get(&def.name) {
                let entry = FeatureEntry {
                    catalog: profile.catalog,
                    feature: &def.name,
                    state,
                };
                map.serialize_entry(&def.name, &entry)?;
            }
        }
        if let Some(programs) = &profile.p4_examples {
            map.serialize_entry(P4_EXAMPLES, programs)?;
        }
        map.end()
    }
}

/// One feature: `false`, `true`, or its map with sub-options before settings
struct FeatureEntry<'a> {
    catalog: &'a OptionCatalog,
    feature: &'a str,
    state: &'a FeatureState,
}

impl Serialize for FeatureEntry<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let settings = match self.state {
            FeatureState::Off => return serializer.serialize_bool(false),
            FeatureState::On => return serializer.serialize_bool(true),
            FeatureState::Settings(settings) => settings,
        };

        let mut map = serializer.serialize_map(Some(settings.len()))?;
        for child in self.catalog.children(self.feature) {
            if let Some(value) = settings.get(&child.name) {
                map.serialize_entry(&child.name, value)?;
            }
        }
        for key in self.catalog.settings(self.feature) {
            if let Some(value) = settings.get(key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// `architectures` in catalog order
struct Architectures<'p, 'c>(&'p Profile<'c>);

impl Serialize for Architectures<'_, '_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let profile = self.0;
        let names: Vec<&str> = profile
            .catalog
            .architectures()
            .filter(|def| profile.architectures.contains(&def.name))
            .map(|def| def.name.as_str())
            .collect();
        names.serialize(serializer)
    }
}

struct Dependencies<'a> {
    packages: &'a [String],
}

impl Serialize for Dependencies<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(SOURCE_PACKAGES, self.packages)?;
        map.end()
    }
}
