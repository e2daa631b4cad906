use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use vocab_check::report::render_text;
use vocab_check::{validate_vocabulary, Profile, VocabularyEntry};

const TRANSLATIONS: &[&str] = &["学校", "博物馆", "美味的", "去", "火车票", "好的朋友", "单词"];

/// Generate a word list for a given scenario
fn generate_entries(count: usize, scenario: &str) -> Vec<VocabularyEntry> {
    (0..count)
        .map(|i| {
            let translation = TRANSLATIONS[i % TRANSLATIONS.len()];
            let pos = if i % 5 == 0 { "verbe" } else { "nom" };
            let mut entry = VocabularyEntry::new(format!("mot{i}"), translation, "/mo/", pos);

            match scenario {
                "missing_fields" if i % 3 == 0 => entry.pronunciation = None,
                "advanced_terms" if i % 7 == 0 => {
                    entry.translation = Some("虚拟式".to_string());
                }
                _ => {}
            }
            entry
        })
        .collect()
}

/// Benchmark validation across entry quality scenarios
fn bench_validation_scenarios(c: &mut Criterion) {
    let profile = Profile::builtin();
    let mut group = c.benchmark_group("validation_scenarios");

    for scenario in ["all_valid", "missing_fields", "advanced_terms"] {
        let entries = generate_entries(100, scenario);
        group.bench_with_input(BenchmarkId::new("validate", scenario), &entries, |b, entries| {
            b.iter(|| black_box(validate_vocabulary(black_box(entries), black_box(&profile))))
        });
    }

    group.finish();
}

/// Benchmark how validation scales with list size
fn bench_validation_scalability(c: &mut Criterion) {
    let profile = Profile::builtin();
    let mut group = c.benchmark_group("validation_scalability");

    for size in [80, 120, 1_000, 10_000] {
        let entries = generate_entries(size, "all_valid");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| black_box(validate_vocabulary(black_box(entries), black_box(&profile))))
        });
    }

    group.finish();
}

fn bench_report_rendering(c: &mut Criterion) {
    let profile = Profile::builtin();
    let entries = generate_entries(120, "missing_fields");
    let report = validate_vocabulary(&entries, &profile);

    c.bench_function("render_text", |b| {
        b.iter(|| black_box(render_text(black_box(&report), black_box(&profile))))
    });
}

criterion_group!(
    validation_benches,
    bench_validation_scenarios,
    bench_validation_scalability,
    bench_report_rendering
);

criterion_main!(validation_benches);
