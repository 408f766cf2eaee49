//! Command-line option tokens
//!
//! A token is either `opt` (enable) or `^opt` (disable). These are what
//! `--configure` and `--override-option` accept, and what the configure
//! stage receives.

use super::{OptionCatalog, OptionDefinition};
use crate::error::{self, Result};

/// Prefix marking a disabled option
pub const DISABLE_PREFIX: char = '^';

impl OptionCatalog {
    /// Parse a single token into its definition and requested state
    pub fn parse_token(&self, token: &str) -> Result<(&OptionDefinition, bool)> {
        let (name, enabled) = match token.strip_prefix(DISABLE_PREFIX) {
            Some(rest) => (rest, false),
            None => (token, true),
        };

        let def = self
            .get(name)
            .ok_or_else(|| error::unknown_token(token, format!("unknown option '{name}'")))?;

        if !def.is_toggle() {
            return Err(error::unknown_token(
                token,
                format!("option {name} takes a value and cannot be toggled"),
            ));
        }

        if !enabled && !def.can_be_disabled {
            return Err(error::unknown_token(
                token,
                format!("option {name} cannot be disabled"),
            ));
        }

        Ok((def, enabled))
    }

    /// Parse a list of tokens, splitting each entry on commas and whitespace
    pub fn parse_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<(&OptionDefinition, bool)>> {
        tokens
            .iter()
            .flat_map(|entry| split_tokens(entry.as_ref()))
            .map(|token| self.parse_token(token))
            .collect()
    }

    /// Inverse of [`parse_token`](Self::parse_token)
    pub fn token_for(&self, name: &str, enabled: bool) -> String {
        if enabled {
            name.to_string()
        } else {
            format!("{DISABLE_PREFIX}{name}")
        }
    }
}

fn split_tokens(entry: &str) -> impl Iterator<Item = &str> {
    entry
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}
