//! Benchmarks for outline_mini input handling.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use outline_mini::{Engine, EngineBuilder, Entry, InputCommand, prefix};

/// Build a deep, bushy outline of `n` entries.
fn sample_outline(n: usize) -> Vec<Entry> {
    (0..n)
        .map(|i| Entry::new(format!("entry {i}"), (i % 7) as i32))
        .collect()
}

fn engine_with(n: usize) -> Engine {
    EngineBuilder::default()
        .labels(4)
        .entries(sample_outline(n))
        .build()
}

fn benchmark_navigation(c: &mut Criterion) {
    let mut engine = engine_with(1000);

    c.bench_function("navigate 1000-entry outline", |b| {
        b.iter(|| {
            for _ in 0..100 {
                engine.handle_input(black_box(InputCommand::MoveDown));
            }
            for _ in 0..100 {
                engine.handle_input(black_box(InputCommand::MoveUp));
            }
        });
    });
}

fn benchmark_reorder_swaps(c: &mut Criterion) {
    let mut engine = engine_with(1000);
    engine.handle_input(InputCommand::Toggle);

    c.bench_function("drag an entry through 100 positions", |b| {
        b.iter(|| {
            for _ in 0..100 {
                engine.handle_input(black_box(InputCommand::MoveDown));
            }
            for _ in 0..100 {
                engine.handle_input(black_box(InputCommand::MoveUp));
            }
        });
    });
}

fn benchmark_insert_remove(c: &mut Criterion) {
    c.bench_function("insert and remove 50 entries", |b| {
        b.iter(|| {
            let mut engine = engine_with(200);
            for _ in 0..50 {
                engine.handle_input(black_box(InputCommand::Confirm));
                engine.handle_input(black_box(InputCommand::Cancel));
            }
            for _ in 0..50 {
                engine.handle_input(black_box(InputCommand::Delete));
            }
            black_box(engine);
        });
    });
}

fn benchmark_editing(c: &mut Criterion) {
    let mut engine = engine_with(100);
    engine.handle_input(InputCommand::Toggle);
    engine.handle_input(InputCommand::Confirm);

    c.bench_function("type and erase a sentence", |b| {
        b.iter(|| {
            for ch in "the quick brown fox jumps over the lazy dog".chars() {
                engine.handle_input(black_box(InputCommand::CharacterInsert(ch)));
            }
            for _ in 0..44 {
                engine.handle_input(black_box(InputCommand::Backspace));
            }
        });
    });
}

fn benchmark_prefix_render(c: &mut Criterion) {
    let depths: Vec<i32> = (0..10_000).map(|i| (i % 9) as i32).collect();

    c.bench_function("render prefixes for 10k depths", |b| {
        b.iter(|| black_box(prefix::render(black_box(&depths))));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_navigation,
              benchmark_reorder_swaps,
              benchmark_insert_remove,
              benchmark_editing,
              benchmark_prefix_render
}
criterion_main!(benches);
