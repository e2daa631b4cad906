//! Validation Engine
//!
//! The four dataset checks. Each check reads only the entry slice and the
//! profile, never another check's result, and none of them can fail: every
//! problem becomes a finding in the report.

use crate::classify::CategoryCounts;
use crate::profile::{CountBounds, Profile};
use crate::vocabulary::{RequiredField, VocabularyEntry};
use serde::Serialize;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Violates an expected dataset invariant
    Error,
    /// Worth a look, not a violation
    Advisory,
}

/// One reported problem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

/// Size check result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountCheck {
    pub total: usize,
    pub bounds: CountBounds,
    pub passed: bool,
}

/// A required field that is absent or empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingField {
    /// 1-indexed position of the entry
    pub position: usize,
    pub field: RequiredField,
    /// The offending record as compact JSON
    pub record: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompletenessCheck {
    pub missing: Vec<MissingField>,
}

impl CompletenessCheck {
    pub fn passed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// First translation found carrying an advanced term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvancedTermHit {
    pub position: usize,
    pub term: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdvancedTermCheck {
    pub first_hit: Option<AdvancedTermHit>,
}

impl AdvancedTermCheck {
    pub fn flagged(&self) -> bool {
        self.first_hit.is_some()
    }
}

/// Everything one validation run found
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub profile: String,
    pub count: CountCheck,
    pub completeness: CompletenessCheck,
    pub categories: CategoryCounts,
    pub advanced: AdvancedTermCheck,
    completed: bool,
}

impl ValidationReport {
    /// Overall success signal: true whenever validation ran to the end,
    /// whatever was found. Use [`ValidationReport::is_valid`] for content.
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// No error-severity findings; advisories don't count
    pub fn is_valid(&self) -> bool {
        !self.findings().iter().any(|f| f.severity == Severity::Error)
    }

    /// All findings in report order
    pub fn findings(&self) -> Vec<Finding> {
        let mut findings = Vec::new();

        if !self.count.passed {
            findings.push(Finding {
                severity: Severity::Error,
                message: format!(
                    "entry count {} outside {}-{}",
                    self.count.total, self.count.bounds.min, self.count.bounds.max
                ),
            });
        }

        findings.extend(self.completeness.missing.iter().map(|m| Finding {
            severity: Severity::Error,
            message: format!("entry {} is missing field '{}'", m.position, m.field),
        }));

        if let Some(hit) = &self.advanced.first_hit {
            findings.push(Finding {
                severity: Severity::Advisory,
                message: format!(
                    "entry {} translation contains advanced term '{}'",
                    hit.position, hit.term
                ),
            });
        }

        findings
    }
}

/// Pass iff the collection size is within bounds (inclusive)
pub fn check_count(entries: &[VocabularyEntry], bounds: CountBounds) -> CountCheck {
    let total = entries.len();
    CountCheck {
        total,
        bounds,
        passed: bounds.contains(total),
    }
}

/// One finding per (entry, field) pair that is absent or empty
pub fn check_completeness(entries: &[VocabularyEntry]) -> CompletenessCheck {
    let missing = entries
        .iter()
        .enumerate()
        .flat_map(|(idx, entry)| {
            entry.missing_fields().into_iter().map(move |field| MissingField {
                position: idx + 1,
                field,
                record: entry.to_compact_json(),
            })
        })
        .collect();

    CompletenessCheck { missing }
}

/// Dataset-level flag: any translation containing any advanced term
pub fn check_advanced_terms<S: AsRef<str>>(
    entries: &[VocabularyEntry],
    terms: &[S],
) -> AdvancedTermCheck {
    for (idx, entry) in entries.iter().enumerate() {
        let translation = entry.translation_text();
        for term in terms {
            let term: &str = term.as_ref();
            if translation.contains(term) {
                return AdvancedTermCheck {
                    first_hit: Some(AdvancedTermHit {
                        position: idx + 1,
                        term: term.to_string(),
                    }),
                };
            }
        }
    }

    AdvancedTermCheck::default()
}

/// Run every check over `entries`
pub fn validate_vocabulary(entries: &[VocabularyEntry], profile: &Profile) -> ValidationReport {
    let count = check_count(entries, profile.count);
    log::debug!("Count check: {} entries, passed={}", count.total, count.passed);

    let completeness = check_completeness(entries);
    log::debug!(
        "Completeness check: {} missing fields",
        completeness.missing.len()
    );

    let categories = CategoryCounts::tally(entries, &profile.keywords);
    log::debug!("Categories: {:?}", categories);

    let advanced = check_advanced_terms(entries, &profile.advanced_terms);
    if let Some(hit) = &advanced.first_hit {
        log::debug!("Advanced term '{}' in entry {}", hit.term, hit.position);
    }

    ValidationReport {
        profile: profile.name.clone(),
        count,
        completeness,
        categories,
        advanced,
        completed: true,
    }
}
