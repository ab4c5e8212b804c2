use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gear_selector::catalog::{normalize, parse_catalog};
use gear_selector::selection::{SelectionCriteria, SelectionEngine};
use serde_json::{json, Value};

const SAMPLE_CATALOG: &str = include_str!("../data/catalog_sample.json");

/// Sample catalog repeated until it holds roughly `n` records
fn raw_catalog(n: usize) -> Vec<Value> {
    let base: Vec<Value> = serde_json::from_str(SAMPLE_CATALOG).unwrap();
    base.iter().cycle().take(n).cloned().collect()
}

fn bench_normalize(c: &mut Criterion) {
    let raw = raw_catalog(2_000);
    c.bench_function("normalize_2000", |b| b.iter(|| normalize(black_box(&raw))));

    let messy = vec![json!({"activities": "['Trek', \"Randonnée\"]", "packs": "Base, Autonomie"}); 2_000];
    c.bench_function("normalize_bracketed_lists_2000", |b| {
        b.iter(|| normalize(black_box(&messy)))
    });
}

fn bench_select(c: &mut Criterion) {
    let catalog = normalize(&raw_catalog(2_000));
    let engine = SelectionEngine::default();
    let criteria = SelectionCriteria::new()
        .with_activity("Randonnée")
        .with_climate("Froid")
        .with_autonomy(false)
        .with_tech_level(2)
        .with_duration(5);

    c.bench_function("select_2000", |b| {
        b.iter(|| engine.select(black_box(&catalog), black_box(&criteria)))
    });

    let batch: Vec<SelectionCriteria> = ["Randonnée", "Trek", "Alpinisme", "Ski rando"]
        .iter()
        .flat_map(|a| (1..=3).map(move |t| SelectionCriteria::new().with_activity(*a).with_tech_level(t)))
        .collect();
    c.bench_function("select_many_12", |b| {
        b.iter(|| engine.select_many(black_box(&catalog), black_box(&batch)))
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_sample_catalog", |b| {
        b.iter(|| parse_catalog(black_box(SAMPLE_CATALOG)).unwrap())
    });
}

criterion_group!(benches, bench_normalize, bench_select, bench_parse);
criterion_main!(benches);
