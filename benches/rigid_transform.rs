use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diff_drive_motion::{
    geometry::{rigid_transform::RigidTransform, twist::Twist},
    odometry::pose_estimate::PoseEstimate,
};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets =
        rigid_transform_exp,
        rigid_transform_exp_straight,
        rigid_transform_log,
        rigid_transform_transform,
        rigid_transform_intersection,
        pose_estimate_update,
}

criterion_main!(benches);

pub fn rigid_transform_exp(c: &mut Criterion) {
    let twist = Twist::new(1.5, 0.0, 0.3);

    c.bench_function("RigidTransform::exp", |b| {
        b.iter(|| RigidTransform::exp(black_box(&twist)))
    });
}

pub fn rigid_transform_exp_straight(c: &mut Criterion) {
    let twist = Twist::new(1.5, 0.0, 0.0);

    c.bench_function("RigidTransform::exp::<straight>", |b| {
        b.iter(|| RigidTransform::exp(black_box(&twist)))
    });
}

pub fn rigid_transform_log(c: &mut Criterion) {
    let transform = RigidTransform::from_xy_degrees(2.0, 2.0, 90.0);

    c.bench_function("RigidTransform::log", |b| {
        b.iter(|| RigidTransform::log(black_box(&transform)))
    });
}

pub fn rigid_transform_transform(c: &mut Criterion) {
    let first = RigidTransform::from_xy_degrees(1.0, 2.0, 30.0);
    let second = RigidTransform::from_xy_degrees(-0.5, 3.0, -75.0);

    c.bench_function("RigidTransform::transform", |b| {
        b.iter(|| black_box(&first).transform(black_box(&second)))
    });
}

pub fn rigid_transform_intersection(c: &mut Criterion) {
    let first = RigidTransform::from_xy_degrees(0.0, 0.0, 0.0);
    let second = RigidTransform::from_xy_degrees(5.0, 5.0, -90.0);

    c.bench_function("RigidTransform::intersection", |b| {
        b.iter(|| black_box(&first).intersection(black_box(&second)))
    });
}

pub fn pose_estimate_update(c: &mut Criterion) {
    let mut estimate = PoseEstimate::new();
    let mut distance = 0.0;

    c.bench_function("PoseEstimate::update", |b| {
        b.iter(|| {
            distance += 0.01;
            estimate.update(black_box(distance), black_box(1.1 * distance), black_box(distance));
        })
    });
}
