//! Vocabulary Checker
//!
//! Checks a study word list before it ships.
//!
//! This library provides:
//! - JSON loading of vocabulary entries
//! - Count, completeness and level checks
//! - Keyword-based categorization driven by profiles
//! - Text and JSON reports

pub mod app;
pub mod classify;
pub mod config;
pub mod profile;
pub mod report;
pub mod validation;
pub mod vocabulary;

// Re-exports for clean public API
pub use classify::{Category, CategoryCounts};
pub use config::Config;
pub use profile::{Profile, ProfileRegistry};
pub use validation::{validate_vocabulary, ValidationReport};
pub use vocabulary::{load_entries, LoadError, VocabularyEntry};
