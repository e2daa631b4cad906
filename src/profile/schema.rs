//! Profile Schema Types
//!
//! File layout (TOML) and the runtime profile the checks read from.

use super::defaults;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Problems loading or validating a profile
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("profile '{name}' is invalid: {reason}")]
    Invalid { name: String, reason: String },

    #[error("no profile named '{0}'")]
    NotFound(String),
}

/// Root profile file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileFile {
    pub profile: ProfileMeta,
    #[serde(default)]
    pub count: CountBounds,
    pub categories: KeywordTables,
    #[serde(default)]
    pub advanced: AdvancedTerms,
}

/// Profile metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ProfileMeta {
    pub name: String,
    pub version: Option<String>,
    pub audience: Option<String>,
    pub description: Option<String>,
}

/// Accepted collection size, both ends inclusive
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct CountBounds {
    #[serde(default = "default_min_entries")]
    pub min: usize,
    #[serde(default = "default_max_entries")]
    pub max: usize,
}

impl Default for CountBounds {
    fn default() -> Self {
        Self {
            min: defaults::MIN_ENTRIES,
            max: defaults::MAX_ENTRIES,
        }
    }
}

impl CountBounds {
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// Keyword lists for the four buckets
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct KeywordTables {
    #[serde(default)]
    pub social_life: Vec<String>,
    #[serde(default)]
    pub culture_travel: Vec<String>,
    #[serde(default)]
    pub adjective: Vec<String>,
    /// Exact part-of-speech value marking a verb
    #[serde(default = "default_verb_tag")]
    pub verb_tag: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AdvancedTerms {
    #[serde(default)]
    pub terms: Vec<String>,
}

fn default_min_entries() -> usize {
    defaults::MIN_ENTRIES
}

fn default_max_entries() -> usize {
    defaults::MAX_ENTRIES
}

fn default_verb_tag() -> String {
    defaults::VERB_TAG.to_string()
}

/// Runtime profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub version: Option<String>,
    /// Who the word list is for, shown in the level line of the report
    pub audience: String,
    pub description: Option<String>,
    pub count: CountBounds,
    pub keywords: KeywordTables,
    pub advanced_terms: Vec<String>,
}

impl From<ProfileFile> for Profile {
    fn from(file: ProfileFile) -> Self {
        Self {
            audience: file
                .profile
                .audience
                .unwrap_or_else(|| defaults::AUDIENCE.to_string()),
            name: file.profile.name,
            version: file.profile.version,
            description: file.profile.description,
            count: file.count,
            keywords: file.categories,
            advanced_terms: file.advanced.terms,
        }
    }
}

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

impl Profile {
    /// Profile assembled from the built-in constant tables
    pub fn builtin() -> Self {
        Self {
            name: defaults::PROFILE_NAME.to_string(),
            version: Some("builtin".to_string()),
            audience: defaults::AUDIENCE.to_string(),
            description: Some("Built-in grade 9 tables".to_string()),
            count: CountBounds::default(),
            keywords: KeywordTables {
                social_life: owned(defaults::SOCIAL_LIFE),
                culture_travel: owned(defaults::CULTURE_TRAVEL),
                adjective: owned(defaults::ADJECTIVE),
                verb_tag: defaults::VERB_TAG.to_string(),
            },
            advanced_terms: owned(defaults::ADVANCED_TERMS),
        }
    }

    /// Parse and validate a profile from TOML text
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ProfileError> {
        let file: ProfileFile = toml::from_str(content).map_err(|source| ProfileError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        let profile = Profile::from(file);
        profile.validate()?;
        Ok(profile)
    }

    /// Load a profile from a TOML file on disk
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Reject profiles the checks cannot work with
    pub fn validate(&self) -> Result<(), ProfileError> {
        let invalid = |reason: String| ProfileError::Invalid {
            name: self.name.clone(),
            reason,
        };

        if self.count.min > self.count.max {
            return Err(invalid(format!(
                "count.min {} exceeds count.max {}",
                self.count.min, self.count.max
            )));
        }
        if self.keywords.verb_tag.is_empty() {
            return Err(invalid("verb_tag must not be empty".to_string()));
        }

        // An empty keyword would match every translation
        let tables = [
            ("social_life", &self.keywords.social_life),
            ("culture_travel", &self.keywords.culture_travel),
            ("adjective", &self.keywords.adjective),
            ("advanced.terms", &self.advanced_terms),
        ];
        for (table, keywords) in tables {
            if keywords.iter().any(String::is_empty) {
                return Err(invalid(format!("{table} contains an empty keyword")));
            }
        }

        Ok(())
    }
}
