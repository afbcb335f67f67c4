use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use qtty::angular::Arcseconds;
use qtty::length::nominal::SolarRadiuses;
use qtty::length::Parsecs;

use occulting::algorithms::{evaluate_sampling, partial_phase_duration};
use occulting::models::Camera;
use occulting::services::{run_survey, SurveyGrid};
use occulting::{LimbVelocity, MarginalBand};

fn bench_single_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_evaluation");

    let rate = LimbVelocity::new(0.55);
    let frame_period = Camera::default().frame_period().unwrap();
    let band = MarginalBand::default();

    group.bench_function("duration_and_sampling", |b| {
        b.iter(|| {
            for i in 1..1000 {
                let diameter = Arcseconds::new(black_box(i as f64 * 1e-5));
                let duration = partial_phase_duration(diameter, black_box(rate)).unwrap();
                black_box(evaluate_sampling(duration, frame_period, band).unwrap());
            }
        });
    });

    group.finish();
}

fn bench_survey(c: &mut Criterion) {
    let mut group = c.benchmark_group("survey");

    let rate = LimbVelocity::new(0.55);
    let camera = Camera::default();
    let band = MarginalBand::default();

    for steps in [10usize, 50, 100] {
        let grid = SurveyGrid {
            radius_min: SolarRadiuses::new(0.1),
            radius_max: SolarRadiuses::new(30.0),
            radius_steps: steps,
            distance_min: Parsecs::new(1.0),
            distance_max: Parsecs::new(100.0),
            distance_steps: steps,
        };
        group.bench_with_input(BenchmarkId::new("grid", steps * steps), &grid, |b, grid| {
            b.iter(|| run_survey(black_box(grid), rate, &camera, band).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_evaluation, bench_survey);
criterion_main!(benches);
