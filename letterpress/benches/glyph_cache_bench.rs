//! Glyph cache microbenchmarks: hit path vs cold population.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use letterpress::{FontStyle, GlyphCache};

/// The steady-state path: every request after the first is a hit.
fn bench_hit_path(c: &mut Criterion) {
    let cache = GlyphCache::new();
    let style = FontStyle::default();
    cache.get_or_create('t', style.clone());

    c.bench_function("get_or_create_hit", |b| {
        b.iter(|| cache.get_or_create(black_box('t'), style.clone()));
    });
}

/// Populating a fresh cache with the printable ASCII range.
fn bench_cold_population(c: &mut Criterion) {
    let style = FontStyle::default();

    c.bench_function("populate_printable_ascii", |b| {
        b.iter(|| {
            let cache = GlyphCache::new();
            for ch in ' '..='~' {
                cache.get_or_create(black_box(ch), style.clone());
            }
            cache
        });
    });
}

criterion_group!(benches, bench_hit_path, bench_cold_population);
criterion_main!(benches);
