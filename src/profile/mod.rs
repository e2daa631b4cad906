//! Validation Profiles
//!
//! Keyword tables and thresholds, kept as data rather than inline literals.

pub mod defaults;
pub mod registry;
pub mod schema;

pub use registry::ProfileRegistry;
pub use schema::{CountBounds, KeywordTables, Profile, ProfileError};
