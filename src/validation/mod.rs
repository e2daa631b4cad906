//! Validation Engine
//!
//! Dataset checks, separated from loading and report rendering.

pub mod engine;

pub use engine::{
    check_advanced_terms, check_completeness, check_count, validate_vocabulary, Finding,
    Severity, ValidationReport,
};

// Re-export per-check results
pub use engine::{AdvancedTermCheck, AdvancedTermHit, CompletenessCheck, CountCheck, MissingField};
