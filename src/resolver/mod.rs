//! Ordering of option mutations
//!
//! Options coming from the command line (`--configure`, `--override-option`)
//! arrive in user order. Applying a sub-option before its feature would fail
//! the gating check, so they are reordered here first.

pub mod sort;

pub use sort::sorted_by_parenthood;
