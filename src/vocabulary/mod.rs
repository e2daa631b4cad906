//! Vocabulary Data
//!
//! Entry model and the JSON loader that produces it.

pub mod entry;
pub mod loader;

pub use entry::{RequiredField, VocabularyEntry};
pub use loader::{load_entries, parse_entries, LoadError};
