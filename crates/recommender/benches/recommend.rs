//! Benchmarks for the recommendation engine
//!
//! Run with: cargo bench --package recommender
//!
//! Loads the sample catalog from the repository's data directory.

use catalog::{parser, BreedCatalog};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use recommender::{ModelContext, RecommendationEngine};
use std::path::Path;
use std::sync::Arc;

fn load_catalog() -> BreedCatalog {
    BreedCatalog::load_from_file(Path::new("../../data/breeds.json"))
        .expect("Failed to load breed catalog")
}

fn load_engine() -> RecommendationEngine {
    let context = ModelContext::build(load_catalog()).expect("Failed to build model context");
    RecommendationEngine::new(Arc::new(context))
}

fn bench_build_context(c: &mut Criterion) {
    c.bench_function("build_model_context", |b| {
        b.iter(|| {
            let context = ModelContext::build(black_box(load_catalog())).unwrap();
            black_box(context)
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let engine = load_engine();
    let preferences = parser::parse_preferences(Path::new("../../data/example_preferences.json"))
        .expect("Failed to load example preferences");

    c.bench_function("recommend_top5", |b| {
        b.iter(|| {
            let raw = engine.recommend(black_box(&preferences), black_box(5)).unwrap();
            black_box(raw)
        })
    });
}

criterion_group!(benches, bench_build_context, bench_recommend);
criterion_main!(benches);
