//! The word list shipped in data/ must pass its own checks
use std::path::Path;

use vocab_check::{load_entries, validate_vocabulary, CategoryCounts, ProfileRegistry};

#[test]
fn test_bundled_grade9_list() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/grade9_words.json");
    let entries = load_entries(&path).expect("load bundled list");

    let registry = ProfileRegistry::with_embedded();
    let profile = registry.get_active_profile().expect("grade9 profile");
    let report = validate_vocabulary(&entries, profile);

    assert!(report.is_valid(), "findings: {:?}", report.findings());
    assert!(!report.advanced.flagged());
    assert_eq!(report.count.total, 90);
    // "城市地图" is both a social-life and a travel word
    assert_eq!(
        report.categories,
        CategoryCounts {
            social_life: 43,
            culture_travel: 19,
            verb: 13,
            adjective: 17,
        }
    );
}
