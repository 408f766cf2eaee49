//! Command helper utilities

use std::path::Path;

use crate::catalog::OptionCatalog;
use crate::error::Result;
use crate::profile::Profile;
use crate::resolver::sorted_by_parenthood;

/// Load the catalog from `--catalog`, or the built-in one
pub fn load_catalog(path: Option<&Path>) -> Result<OptionCatalog> {
    match path {
        Some(path) => OptionCatalog::load(path),
        None => OptionCatalog::builtin(),
    }
}

/// Apply option tokens to a profile
///
/// Defining options are applied before sub-options, so
/// `thrift-switch,switch` works the same as `switch,thrift-switch`.
pub fn apply_tokens<S: AsRef<str>>(profile: &mut Profile<'_>, tokens: &[S]) -> Result<()> {
    let catalog = profile.catalog();
    let parsed = catalog.parse_tokens(tokens)?;
    for (def, enabled) in sorted_by_parenthood(parsed) {
        profile.set_option(&def.name, enabled)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    #[test]
    fn test_load_builtin_catalog() {
        let catalog = load_catalog(None).unwrap();
        assert!(catalog.is_known("tofino"));
    }

    #[test]
    fn test_load_missing_catalog() {
        let err = load_catalog(Some(Path::new("/nonexistent/options.yaml"))).unwrap_err();
        assert!(matches!(err, ProfileError::FileReadFailed { .. }));
    }

    #[test]
    fn test_apply_tokens_order_independent() {
        let catalog = OptionCatalog::builtin().unwrap();
        let mut profile = Profile::new(&catalog);
        apply_tokens(&mut profile, &["^sai,thrift-switch", "switch"]).unwrap();

        let options = profile.config_options();
        assert_eq!(options.get("switch"), Some(&true));
        assert_eq!(options.get("thrift-switch"), Some(&true));
        assert_eq!(options.get("sai"), Some(&false));
    }

    #[test]
    fn test_apply_tokens_gating_still_enforced() {
        let catalog = OptionCatalog::builtin().unwrap();
        let mut profile = Profile::new(&catalog);
        let err = apply_tokens(&mut profile, &["sai"]).unwrap_err();
        assert!(matches!(err, ProfileError::Gating { .. }));
    }

    #[test]
    fn test_apply_tokens_unknown() {
        let catalog = OptionCatalog::builtin().unwrap();
        let mut profile = Profile::new(&catalog);
        assert!(apply_tokens(&mut profile, &["warp-drive"]).is_err());
    }
}
