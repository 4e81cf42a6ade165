use criterion::{criterion_group, criterion_main, Criterion};
use promptbox_core::{filter::filter, merge::merge, Prompt};
use std::hint::black_box;

fn library(size: usize, offset: usize) -> Vec<Prompt> {
    (0..size)
        .map(|i| Prompt {
            id:         (i + offset).to_string(),
            title:      format!("Prompt number {}", i),
            tags:       vec!["agile".into(), format!("tag{}", i % 17)],
            text:       "Summarize the following meeting notes in three bullet points.".into(),
            category:   Some(if i % 3 == 0 { "Work" } else { "Uncategorized" }.into()),
            created_at: None,
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let prompts = library(5_000, 0);
    c.bench_function("filter 5k by tag", |b| {
        b.iter(|| filter(black_box(&prompts), black_box("tag3"), black_box("Work")))
    });
}

fn bench_merge(c: &mut Criterion) {
    let existing = library(5_000, 0);
    let incoming = library(5_000, 2_500);
    c.bench_function("merge 5k + 5k half overlapping", |b| {
        b.iter(|| merge(black_box(existing.clone()), black_box(incoming.clone())))
    });
}

criterion_group!(benches, bench_filter, bench_merge);
criterion_main!(benches);
