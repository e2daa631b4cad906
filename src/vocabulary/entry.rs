//! Vocabulary Entry
//!
//! One study word as stored in the dataset. Required fields are optional in
//! memory so that incomplete records load and get reported instead of rejected.
//! A falsy JSON value (`null`, `false`, `0`, `[]`, `{}`) in a required field
//! counts as missing; any other non-string value is a malformed record.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single vocabulary record (matches the dataset JSON keys)
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct VocabularyEntry {
    #[serde(
        rename = "french",
        default,
        deserialize_with = "required_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub term: Option<String>,
    #[serde(
        rename = "chinese",
        default,
        deserialize_with = "required_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub translation: Option<String>,
    #[serde(
        rename = "phonetic",
        default,
        deserialize_with = "required_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub pronunciation: Option<String>,
    #[serde(
        default,
        deserialize_with = "required_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub part_of_speech: Option<String>,
    /// Grouping label, never checked; kept as whatever JSON the dataset holds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Value>,
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// String or missing; falsy non-strings are treated as missing
fn required_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        Some(value) if !is_falsy(&value) => Err(D::Error::custom(format!(
            "expected a string, found {}",
            value
        ))),
        _ => Ok(None),
    }
}

/// The four fields every entry must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Term,
    Translation,
    Pronunciation,
    PartOfSpeech,
}

impl RequiredField {
    /// Checked in dataset key order
    pub const ALL: [RequiredField; 4] = [
        RequiredField::Term,
        RequiredField::Translation,
        RequiredField::Pronunciation,
        RequiredField::PartOfSpeech,
    ];

    /// Key used for this field in the dataset file
    pub fn key(self) -> &'static str {
        match self {
            RequiredField::Term => "french",
            RequiredField::Translation => "chinese",
            RequiredField::Pronunciation => "phonetic",
            RequiredField::PartOfSpeech => "part_of_speech",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl VocabularyEntry {
    /// Build a fully populated entry
    pub fn new(
        term: impl Into<String>,
        translation: impl Into<String>,
        pronunciation: impl Into<String>,
        part_of_speech: impl Into<String>,
    ) -> Self {
        Self {
            term: Some(term.into()),
            translation: Some(translation.into()),
            pronunciation: Some(pronunciation.into()),
            part_of_speech: Some(part_of_speech.into()),
            category: None,
        }
    }

    /// Raw value of a required field, if present
    pub fn field(&self, field: RequiredField) -> Option<&str> {
        match field {
            RequiredField::Term => self.term.as_deref(),
            RequiredField::Translation => self.translation.as_deref(),
            RequiredField::Pronunciation => self.pronunciation.as_deref(),
            RequiredField::PartOfSpeech => self.part_of_speech.as_deref(),
        }
    }

    /// Absent and empty count the same
    pub fn is_missing(&self, field: RequiredField) -> bool {
        self.field(field).is_none_or(str::is_empty)
    }

    /// Required fields that are absent or empty, in key order
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| self.is_missing(*field))
            .collect()
    }

    /// Translation text, empty when absent
    pub fn translation_text(&self) -> &str {
        self.translation.as_deref().unwrap_or("")
    }

    /// Part-of-speech tag, empty when absent
    pub fn part_of_speech_tag(&self) -> &str {
        self.part_of_speech.as_deref().unwrap_or("")
    }

    /// Compact JSON form used in diagnostic lines
    pub fn to_compact_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}
