use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use heliopos::kepler::solve_kepler;
use heliopos::{Body, EphemParams, SolarSystem, Trajectory};

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

fn random_cases(seed: u64, samples: usize, e_range: std::ops::Range<f64>) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..samples)
        .map(|_| {
            let e = rng.random_range(e_range.clone());
            (rand_angle(&mut rng), e)
        })
        .collect()
}

/// Planetary regime: e ∈ [0.0, 0.25)
fn bench_planetary(c: &mut Criterion) {
    let mut seed = 0xDEADBEEF_u64;

    c.bench_function("solve_kepler/planetary_e<0.25", |b| {
        b.iter_batched(
            || {
                seed += 1;
                random_cases(seed, 10_000, 0.0..0.25)
            },
            |cases| {
                for (m, e) in cases {
                    let sol = solve_kepler(black_box(m), black_box(e), 1e-6, 50).unwrap();
                    black_box(sol);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// High-eccentricity (still elliptic): e ∈ [0.7, 0.9)
fn bench_high_e(c: &mut Criterion) {
    let mut seed = 0xBADF00D_u64;

    c.bench_function("solve_kepler/high_e_0.7..0.9", |b| {
        b.iter_batched(
            || {
                seed += 1;
                random_cases(seed, 10_000, 0.7..0.9)
            },
            |cases| {
                for (m, e) in cases {
                    let _ = black_box(solve_kepler(black_box(m), black_box(e), 1e-6, 50));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full pipeline: one position query per planet
fn bench_position(c: &mut Criterion) {
    let system = SolarSystem::default();

    c.bench_function("position/all_planets", |b| {
        b.iter(|| {
            for body in Body::ALL {
                black_box(system.position_of(body, black_box(2460000.5)).unwrap());
            }
        })
    });
}

/// One century of daily samples, parallel sampler
fn bench_trajectory(c: &mut Criterion) {
    let params = EphemParams::default();

    c.bench_function("trajectory/neptune_36525_days", |b| {
        b.iter(|| {
            let path = Trajectory::sample(Body::Neptune, black_box(2451545.0), 36_525, &params);
            black_box(path.unwrap());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_position, bench_trajectory
);
criterion_main!(benches);
