//! Trajectory generation benchmarks with 95% confidence intervals.
//!
//! Reproducible performance measurements for the two hot paths: one
//! body's propagation over a year-scale grid, and assembly of the full
//! eight-planet dataset.
//!
//! Run with: cargo criterion

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orrery::prelude::*;

/// Per-body RK4 propagation at the production step size.
fn bench_propagate_earth(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate");
    group.sample_size(100);
    group.confidence_level(0.95);

    let mu = G * SOLAR_MASS;
    let table = PlanetTable::solar_system();
    let earth = table.get("Earth").expect("Earth").clone();
    let eom = EquationOfMotion::new(mu, None);
    let integrator = Rk4Integrator::new();
    let initial = earth.perihelion_state(mu);

    for orbits in [1usize, 4] {
        let span = earth.period(mu) * orbits as f64;
        let grid = TimeGrid::from_span(1e5, span).expect("grid");

        group.bench_with_input(BenchmarkId::new("earth_orbits", orbits), &grid, |b, grid| {
            b.iter(|| {
                let samples = integrator
                    .propagate(&eom, &initial, grid)
                    .expect("propagation failed");
                black_box(samples.len())
            });
        });
    }

    group.finish();
}

/// Full dataset generation, eight planets on the shared grid.
fn bench_generate_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_dataset");
    group.sample_size(50);
    group.confidence_level(0.95);

    let table = PlanetTable::solar_system();

    for span_periods in [0.01, 0.05] {
        let config = SimConfig::builder().span_periods(span_periods).build();

        group.bench_with_input(
            BenchmarkId::new("solar_system", format!("{span_periods}")),
            &config,
            |b, config| {
                b.iter(|| {
                    let dataset =
                        orrery::generate_dataset(config, &table).expect("generation failed");
                    black_box(dataset.num_bodies())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_propagate_earth, bench_generate_dataset);
criterion_main!(benches);
