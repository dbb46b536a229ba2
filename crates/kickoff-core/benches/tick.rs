//! Per-tick cost of the match engine under a few input patterns.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kickoff_core::prelude::*;

fn pattern(name: &str) -> KeyboardState {
    match name {
        "idle" => KeyboardState::new(),
        "running" => KeyboardState::new()
            .hold(Key::D)
            .hold(Key::W)
            .hold(Key::Left)
            .hold(Key::Down),
        _ => KeyboardState::new()
            .hold(Key::D)
            .hold(Key::E)
            .hold(Key::Left)
            .hold(Key::Return),
    }
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_update");
    for name in ["idle", "running", "charging"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &name, |b, &name| {
            let keys = pattern(name);
            let mut config = MatchConfig::default();
            config.match_duration_ms = u64::MAX;
            let mut engine = MatchEngine::new(config, 0);
            let mut now = 0u64;
            b.iter(|| {
                now += 16;
                black_box(engine.update(&keys, now));
            });
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let engine = MatchEngine::new(MatchConfig::default(), 0);
    c.bench_function("match_snapshot", |b| {
        b.iter(|| black_box(engine.snapshot(black_box(1_000))));
    });
}

criterion_group!(benches, bench_update, bench_snapshot);
criterion_main!(benches);
