//! End-to-end scenarios over generated word lists
use vocab_check::report::render_text;
use vocab_check::validation::validate_vocabulary;
use vocab_check::{Profile, VocabularyEntry};

/// `total` well-formed entries, the first `verbs` tagged as verbs
fn word_list(total: usize, verbs: usize) -> Vec<VocabularyEntry> {
    (0..total)
        .map(|i| {
            let pos = if i < verbs { "verbe" } else { "nom" };
            VocabularyEntry::new(format!("mot{i}"), "单词", "/mo/", pos)
        })
        .collect()
}

#[test]
fn test_hundred_clean_entries_with_twenty_verbs() {
    let profile = Profile::builtin();
    let report = validate_vocabulary(&word_list(100, 20), &profile);

    assert!(report.count.passed);
    assert!(report.completeness.passed());
    assert_eq!(report.categories.verb, 20);
    assert!(!report.advanced.flagged());
    assert!(report.is_valid());
    assert!(report.completed());

    let lines = render_text(&report, &profile);
    assert!(lines.contains(&"✓ 词汇数量符合要求（80-120个）".to_string()));
    assert!(lines.contains(&"✓ 所有词条字段完整".to_string()));
    assert!(lines.contains(&"动词: 20个".to_string()));
    assert!(lines.contains(&"✓ 词汇水平适合初三学生".to_string()));
}

#[test]
fn test_seventy_five_entries_fail_count_but_report_completes() {
    let profile = Profile::builtin();
    let report = validate_vocabulary(&word_list(75, 0), &profile);

    assert!(!report.count.passed);
    assert!(report.completed());

    let lines = render_text(&report, &profile);
    assert_eq!(lines[0], "词汇总数: 75");
    assert!(lines[1].starts_with("✗"));
    assert!(lines.contains(&"词汇分类统计:".to_string()));
    assert!(lines.contains(&"形容词: 0个".to_string()));
}

#[test]
fn test_one_missing_pronunciation() {
    let profile = Profile::builtin();
    let mut entries = word_list(90, 0);
    entries[41].pronunciation = None;

    let report = validate_vocabulary(&entries, &profile);
    assert_eq!(report.completeness.missing.len(), 1);
    assert_eq!(report.completeness.missing[0].position, 42);
    assert!(!report.is_valid());
    assert!(report.completed());

    let lines = render_text(&report, &profile);
    let violations: Vec<_> = lines
        .iter()
        .filter(|l| l.contains("缺少字段"))
        .collect();
    assert_eq!(violations.len(), 1);
    assert!(violations[0].starts_with("✗ 第42个词条缺少字段: phonetic"));
    assert!(lines.contains(&"✗ 共1处字段缺失".to_string()));
}

#[test]
fn test_subjunctive_translation_only_changes_advisory() {
    let profile = Profile::builtin();
    let clean = word_list(100, 10);
    let mut flagged = clean.clone();
    flagged[7].translation = Some("虚拟式".to_string());

    let clean_report = validate_vocabulary(&clean, &profile);
    let flagged_report = validate_vocabulary(&flagged, &profile);

    assert!(flagged_report.advanced.flagged());
    assert_eq!(flagged_report.count, clean_report.count);
    assert_eq!(flagged_report.completeness, clean_report.completeness);
    assert_eq!(flagged_report.categories, clean_report.categories);

    let lines = render_text(&flagged_report, &profile);
    assert!(lines.contains(&"! 可能包含过高级词汇".to_string()));
}

#[test]
fn test_advisory_unaffected_by_number_of_matches() {
    let profile = Profile::builtin();
    let mut one = word_list(80, 0);
    one[0].translation = Some("主动态".to_string());
    let mut many = one.clone();
    for entry in many.iter_mut().take(30) {
        entry.translation = Some("被动态".to_string());
    }

    assert!(validate_vocabulary(&one, &profile).advanced.flagged());
    assert!(validate_vocabulary(&many, &profile).advanced.flagged());
}

#[test]
fn test_every_missing_pair_is_reported() {
    let profile = Profile::builtin();
    let entries = vec![
        VocabularyEntry::default(),
        VocabularyEntry::new("le bus", "公交车", "/bys/", ""),
    ];

    let report = validate_vocabulary(&entries, &profile);
    let pairs: Vec<_> = report
        .completeness
        .missing
        .iter()
        .map(|m| (m.position, m.field.key()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (1, "french"),
            (1, "chinese"),
            (1, "phonetic"),
            (1, "part_of_speech"),
            (2, "part_of_speech"),
        ]
    );
}

#[test]
fn test_verb_bucket_excludes_near_matches() {
    let profile = Profile::builtin();
    let entries = vec![
        VocabularyEntry::new("aller", "去", "/a.le/", "verbe"),
        VocabularyEntry::new("se lever", "起床", "/sə lə.ve/", "verbe pronominal"),
        VocabularyEntry::new("venir", "来", "/və.niʁ/", "Verbe"),
        VocabularyEntry::new("faire", "做", "/fɛʁ/", "verbe"),
    ];

    let report = validate_vocabulary(&entries, &profile);
    assert_eq!(report.categories.verb, 2);
}

#[test]
fn test_social_and_adjective_overlap_counts_twice() {
    let profile = Profile::builtin();
    let entries = vec![VocabularyEntry::new(
        "une bonne école",
        "好的学校",
        "/yn bɔn e.kɔl/",
        "nom",
    )];

    let report = validate_vocabulary(&entries, &profile);
    assert_eq!(report.categories.social_life, 1);
    assert_eq!(report.categories.adjective, 1);
}

#[test]
fn test_permutation_keeps_bucket_sizes() {
    let profile = Profile::builtin();
    let entries = vec![
        VocabularyEntry::new("le passeport", "护照", "/pas.pɔʁ/", "nom"),
        VocabularyEntry::new("délicieux", "美味的", "/de.li.sjø/", "adjectif"),
        VocabularyEntry::new("le lundi", "星期一", "/lœ̃.di/", "nom"),
        VocabularyEntry::new("visiter", "参观博物馆", "/vi.zi.te/", "verbe"),
    ];
    let mut rotated = entries.clone();
    rotated.rotate_left(2);

    assert_eq!(
        validate_vocabulary(&entries, &profile).categories,
        validate_vocabulary(&rotated, &profile).categories
    );
}
