use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use nearsky::bodies::ALL_BODIES;
use nearsky::coordinates::EquatorialFrame;
use nearsky::engine::{Instant, NearSky};

/// One frame of a sky view: all ten bodies at a single instant. The shared
/// Earth/Sun state should be computed once and amortized over the sweep.
fn full_sky_sweep(c: &mut Criterion) {
    let mut sky = NearSky::new();
    let mut jde = 2448976.5;

    c.bench_function("full_sky_sweep", |b| {
        b.iter(|| {
            jde += 1.0 / 86400.0;
            let instant = Instant::new(jde, 0.0);
            for body in ALL_BODIES {
                black_box(sky.position(body, instant, None, EquatorialFrame::Apparent));
            }
        })
    });
}

fn single_body_cached(c: &mut Criterion) {
    let mut sky = NearSky::new();
    let instant = Instant::new(2448976.5, 0.0);

    c.bench_function("venus_cached_instant", |b| {
        b.iter(|| {
            black_box(sky.position(
                nearsky::bodies::Body::Venus,
                instant,
                None,
                EquatorialFrame::Apparent,
            ))
        })
    });
}

criterion_group!(benches, full_sky_sweep, single_body_cached);
criterion_main!(benches);
