//! Dataset Loader
//!
//! Reads the whole vocabulary file into memory. Any structural problem is a
//! `LoadError`; content problems are left for the validator to report.

use super::entry::VocabularyEntry;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal problems obtaining the entry collection
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read vocabulary file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("vocabulary file {path:?} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("vocabulary file {path:?} must contain a JSON array of entries")]
    NotAnArray { path: PathBuf },

    #[error("entry {position} in {path:?} is malformed: {reason}")]
    MalformedEntry {
        path: PathBuf,
        /// 1-indexed position in the file
        position: usize,
        reason: String,
    },
}

/// Load all entries from a JSON file
pub fn load_entries(path: &Path) -> Result<Vec<VocabularyEntry>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&content, path)?;
    log::info!("Loaded {} entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Parse entries from JSON text; `origin` is only used in error messages
pub fn parse_entries(content: &str, origin: &Path) -> Result<Vec<VocabularyEntry>, LoadError> {
    let value: Value = serde_json::from_str(content).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    let Value::Array(records) = value else {
        return Err(LoadError::NotAnArray {
            path: origin.to_path_buf(),
        });
    };

    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| parse_record(idx + 1, record, origin))
        .collect()
}

fn parse_record(
    position: usize,
    record: Value,
    origin: &Path,
) -> Result<VocabularyEntry, LoadError> {
    let malformed = |reason: String| LoadError::MalformedEntry {
        path: origin.to_path_buf(),
        position,
        reason,
    };

    if !record.is_object() {
        return Err(malformed(format!(
            "expected an object, found {}",
            value_kind(&record)
        )));
    }

    serde_json::from_value(record).map_err(|e| malformed(e.to_string()))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
