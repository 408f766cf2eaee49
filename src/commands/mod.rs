//! Command implementations for bfprofile CLI

pub mod apply;
pub mod completions;
pub mod create;
pub mod describe;
pub mod helpers;
pub mod options;
pub mod schema;
pub mod version;
