use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diff_drive_motion::motion_profiles::{
    curve_generator::TrajectoryCurveGenerator, trajectory_generator::TrajectoryGenerator,
};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets =
        trajectory_generator_plan,
        trajectory_generator_generate_trajectory,
        trajectory_generator_generate_scaled_trajectory,
        curve_generator_generate_curve,
        curve_trajectory_simulate,
}

criterion_main!(benches);

pub fn trajectory_generator_plan(c: &mut Criterion) {
    let generator = create_generator();

    c.bench_function("TrajectoryGenerator::plan", |b| {
        b.iter(|| generator.plan(black_box(4.0), black_box(4.0), black_box(100.0)))
    });
}

pub fn trajectory_generator_generate_trajectory(c: &mut Criterion) {
    let generator = create_generator();

    c.bench_function("TrajectoryGenerator::generate_trajectory", |b| {
        b.iter(|| generator.generate_trajectory(black_box(0.0), black_box(0.0), black_box(10.0)))
    });
}

pub fn trajectory_generator_generate_scaled_trajectory(c: &mut Criterion) {
    let generator = create_generator();
    let lead = generator.generate_trajectory(0.0, 0.0, 10.0).unwrap();

    c.bench_function("TrajectoryGenerator::generate_scaled_trajectory", |b| {
        b.iter(|| generator.generate_scaled_trajectory(black_box(&lead), black_box(0.6)))
    });
}

pub fn curve_generator_generate_curve(c: &mut Criterion) {
    let curve_generator = TrajectoryCurveGenerator::new(create_generator(), 2.4).unwrap();

    c.bench_function("TrajectoryCurveGenerator::generate_curve", |b| {
        b.iter(|| {
            curve_generator.generate_curve(
                black_box(0.0),
                black_box(0.0),
                black_box(90.0),
                black_box(5.0),
            )
        })
    });
}

pub fn curve_trajectory_simulate(c: &mut Criterion) {
    let curve_generator = TrajectoryCurveGenerator::new(create_generator(), 2.4).unwrap();
    let curve = curve_generator.generate_curve(0.0, 0.0, 90.0, 5.0).unwrap();

    c.bench_function("CurveTrajectory::simulate", |b| {
        b.iter(|| black_box(&curve).simulate())
    });
}

fn create_generator() -> TrajectoryGenerator {
    TrajectoryGenerator::new(12.0, 12.0, 0.005).unwrap()
}
