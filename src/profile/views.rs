//! Computed views of a profile
//!
//! Every view is recomputed from the current document on each call, so it
//! always reflects the latest mutation.

use std::collections::{BTreeMap, BTreeSet};

use super::{FeatureState, OptionValue, Profile, SWITCH};

/// Source packages every profile builds
const BASE_PACKAGES: [&str; 2] = ["bridge", "libcli"];

impl Profile<'_> {
    /// Copy of `global-options`
    pub fn global_options(&self) -> BTreeMap<String, OptionValue> {
        self.global_options.clone()
    }

    /// Global toggles only; free-form values such as `p4ppflags` or `kdir`
    /// are configuration values, not options
    pub fn global_options_without_flags(&self) -> BTreeMap<String, OptionValue> {
        self.global_options
            .iter()
            .filter(|(name, _)| self.catalog.get(name).is_some_and(|d| d.is_toggle()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Options implied by the `features` section
    ///
    /// A feature that is itself an option counts as on unless it is `false`.
    /// Known options inside a feature map are included with their value;
    /// informational keys such as `profile` are skipped.
    pub fn features_as_options(&self) -> BTreeMap<String, bool> {
        let mut options = BTreeMap::new();
        for (feature, state) in &self.features {
            if self.catalog.is_known(feature) {
                options.insert(feature.clone(), state.is_enabled());
            }
            if let FeatureState::Settings(settings) = state {
                for (key, value) in settings {
                    if self.catalog.is_known(key) {
                        options.insert(key.clone(), value.is_truthy());
                    }
                }
            }
        }
        options
    }

    /// Every architecture in the catalog, on iff listed in `architectures`
    pub fn architecture_options(&self) -> BTreeMap<String, bool> {
        self.catalog
            .architectures()
            .map(|def| (def.name.clone(), self.architectures.contains(&def.name)))
            .collect()
    }

    /// Resolved option set
    ///
    /// Merges global toggles, feature-derived options and architecture
    /// options; on a name collision the later source wins.
    pub fn config_options(&self) -> BTreeMap<String, bool> {
        let mut options: BTreeMap<String, bool> = self
            .global_options_without_flags()
            .into_iter()
            .map(|(name, value)| (name, value.is_truthy()))
            .collect();
        options.extend(self.features_as_options());
        options.extend(self.architecture_options());
        options
    }

    /// Resolved option set rendered as configure tokens
    pub fn config_args(&self) -> BTreeSet<String> {
        self.config_options()
            .into_iter()
            .map(|(name, enabled)| self.catalog.token_for(&name, enabled))
            .collect()
    }

    /// Whether an option ends up on, falling back to the catalog default
    pub fn is_enabled(&self, name: &str) -> bool {
        self.config_options()
            .get(name)
            .copied()
            .unwrap_or_else(|| self.catalog.get(name).is_some_and(|d| d.default))
    }

    /// Source packages the dependency stage must build
    ///
    /// An explicit `dependencies/source-packages` list wins; otherwise the
    /// list is derived from the enabled drivers and features.
    pub fn source_packages(&self) -> Vec<String> {
        if let Some(packages) = &self.source_packages {
            return packages.clone();
        }

        let mut packages: Vec<String> = BASE_PACKAGES.iter().map(ToString::to_string).collect();

        let needs_thrift = self.is_enabled("thrift-driver")
            || (self.is_enabled(SWITCH) && self.is_enabled("thrift-switch"))
            || (self.is_enabled("bf-diags") && self.is_enabled("thrift-diags"));
        if needs_thrift {
            packages.push("thrift".to_string());
        }
        if self.is_enabled("grpc") {
            packages.push("grpc".to_string());
        }
        if self.is_enabled("pi") || self.is_enabled("p4rt") {
            packages.push("pi".to_string());
        }
        packages
    }

    /// Raw `architectures` list
    pub fn architectures(&self) -> &[String] {
        &self.architectures
    }

    /// Programs to build: `p4-examples`, then the switch profile if set
    pub fn build_targets(&self) -> Vec<String> {
        let mut targets = self.p4_examples.clone().unwrap_or_default();
        if let Some(profile) = self.switch_profile() {
            targets.push(profile.to_string());
        }
        targets
    }

    /// Whether the profile targets real hardware (a BSP is configured)
    pub fn is_asic(&self) -> bool {
        self.is_enabled(super::BF_PLATFORMS)
    }
}
