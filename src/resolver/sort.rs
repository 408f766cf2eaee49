//! Parenthood sort for option mutations
//!
//! Guarantees that applying `(option, enabled)` pairs in order through
//! [`Profile::set_option`](crate::profile::Profile::set_option) never fails a
//! gating check purely because of input order.
//!
//! ## Algorithm
//!
//! A stable partition:
//!
//! 1. Feature-defining options, in their original relative order
//! 2. Everything else, in their original relative order
//!
//! ## Example
//!
//! ```text
//! Input:  [thrift-switch, tofino, switch, ^sai]
//! Result: [switch, thrift-switch, tofino, ^sai]
//!          ^^^^^^  ^^^^^^^^^^^^^^^^^^^^^^^^^^^
//!          parents everything else, order kept
//! ```

use crate::catalog::OptionDefinition;

/// Reorder mutations so every feature is set before its sub-options
///
/// Total: never fails and never drops or duplicates an entry.
pub fn sorted_by_parenthood<'a>(
    options: impl IntoIterator<Item = (&'a OptionDefinition, bool)>,
) -> Vec<(&'a OptionDefinition, bool)> {
    let (mut parents, others): (Vec<_>, Vec<_>) = options
        .into_iter()
        .partition(|(def, _)| def.defines_category());
    parents.extend(others);
    parents
}
