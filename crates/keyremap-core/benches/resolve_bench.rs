//! Criterion benchmarks for mapping resolution.
//!
//! Resolution runs inside the OS event callback on every key press, so it
//! must stay well inside a 100µs-class budget to avoid adding perceptible
//! input latency.  These benches measure the hit, miss, and fallback paths.
//!
//! Run with:
//! ```bash
//! cargo bench --package keyremap-core --bench resolve_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keyremap_core::{config, ModifierSet, Resolver};

/// A config with a handful of keys, each carrying a shift-aware candidate
/// and an unconditional fallback (the documented authoring pattern).
const BENCH_CONFIG: &str = "\
\"10\": [\"shift\", \"~\"]
\"10\": [\"\", \"`\"]
\"18\": [\"shift\", \"!\"]
\"18\": [\"\", \"1\"]
\"19\": [\"shift\", \"@\"]
\"19\": [\"\", \"2\"]
\"33\": [\"shift+command\", \"{\"]
\"33\": [\"\", \"[\"]
";

const SHIFT: ModifierSet = ModifierSet {
    shift: true,
    control: false,
    command: false,
    option: false,
};

fn bench_resolve(c: &mut Criterion) {
    let resolver = Resolver::new(config::parse(BENCH_CONFIG));
    let mut group = c.benchmark_group("resolve");

    // First candidate hit (typical per-event cost).
    group.bench_function("first_candidate_hit", |b| {
        b.iter(|| resolver.resolve(black_box(10), black_box(SHIFT)))
    });

    // Fallback hit: first candidate's requirement fails, second matches.
    group.bench_function("fallback_hit", |b| {
        b.iter(|| resolver.resolve(black_box(10), black_box(ModifierSet::NONE)))
    });

    // Miss: key code has no table entry at all (the common case for most
    // keys on the keyboard).
    group.bench_function("unmapped_miss", |b| {
        b.iter(|| resolver.resolve(black_box(125), black_box(SHIFT)))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_parse");

    // Startup-only cost, but worth tracking: an 8-line config.
    group.bench_function("parse_8_lines", |b| {
        b.iter(|| config::parse(black_box(BENCH_CONFIG)))
    });

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_parse);
criterion_main!(benches);
