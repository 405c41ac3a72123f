//! Benchmarks for guideline extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run over synthetic guideline text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use guidetab::{extract_records, extract_records_with_options, ExtractOptions, RecordSegmenter};

/// Builds synthetic guideline text with the given number of disease records.
fn create_guideline(record_count: usize) -> String {
    let mut text = String::from("CLINICAL GUIDELINES\nChapter 1: Infections\n");

    for i in 0..record_count {
        text.push_str(&format!(
            "1.{} Condition{} ICD10 CODE: B{:02}\n",
            i + 1,
            i + 1,
            i % 100
        ));
        text.push_str("A short description of the condition.\n");
        text.push_str("Causes\n~ Pathogen exposure ~ Host susceptibility\n");
        text.push_str("Clinical features\nFever.\nMalaise and headache.\n");
        text.push_str("Investigations\nFull blood count.\n");
        text.push_str("Management\nSupportive care and follow-up.\n");
        text.push_str("TREATMENT\nLOC: HC3\n~ First-line agent dose\nPrevention\nHand hygiene.\n");
    }

    text
}

/// Benchmark header scanning and span partitioning alone.
fn bench_segmentation(c: &mut Criterion) {
    let text = create_guideline(100);
    let segmenter = RecordSegmenter::new();

    c.bench_function("segment_100_records", |b| {
        b.iter(|| segmenter.segment(black_box(&text)));
    });
}

/// Benchmark the full pipeline at various document sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for record_count in [10, 50, 100].iter() {
        let text = create_guideline(*record_count);

        group.bench_function(format!("{}_records", record_count), |b| {
            b.iter(|| extract_records(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark parallel against sequential per-record extraction.
fn bench_extraction_modes(c: &mut Criterion) {
    let text = create_guideline(100);
    let mut group = c.benchmark_group("extraction_modes");

    group.bench_function("parallel", |b| {
        b.iter(|| extract_records(black_box(&text)));
    });

    group.bench_function("sequential", |b| {
        b.iter(|| {
            extract_records_with_options(black_box(&text), ExtractOptions::new().sequential())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_segmentation,
    bench_extraction,
    bench_extraction_modes,
);
criterion_main!(benches);
