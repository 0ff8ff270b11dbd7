use std::f64::consts::PI;

use float_cmp::{ApproxEq, F64Margin};

use super::*;

const MARGIN: F64Margin = F64Margin {
    ulps: 2,
    epsilon: 1e-9,
};

#[test]
fn when_calculating_forward_kinematics_should_average_wheels() {
    let twist = forward_kinematics(1.0, 3.0, 0.25);

    assert_eq!(Twist::new(2.0, 0.0, 0.25), twist);
}

#[test]
fn when_calculating_forward_kinematics_with_track_should_derive_rotation() {
    let twist = forward_kinematics_with_track(-0.6, 0.6, 1.2);

    assert_eq!(0.0, twist.dx());
    assert_eq!(0.0, twist.dy());
    assert!(twist.dtheta().approx_eq(1.0, MARGIN));
}

#[test]
fn when_calculating_inverse_kinematics_for_straight_motion_should_match_dx() {
    let velocity = inverse_kinematics(&Twist::new(1.5, 0.0, 1e-12), 2.4);

    assert_eq!(DriveVelocity::new(1.5, 1.5), velocity);
}

#[test]
fn when_calculating_inverse_kinematics_for_rotation_should_split_wheels() {
    let velocity = inverse_kinematics(&Twist::new(1.0, 0.0, 0.5), 2.0);

    assert_eq!(0.5, velocity.left());
    assert_eq!(1.5, velocity.right());
}

#[test]
fn when_round_tripping_kinematics_should_recover_wheel_deltas() {
    let track_widths = [0.5, 1.0, 2.4];
    let deltas = [
        (0.0, 0.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (-0.5, 0.75),
        (3.25, -3.25),
        (0.001, 0.0015),
    ];

    for track_width in track_widths {
        for (left, right) in deltas {
            let twist = forward_kinematics_with_track(left, right, track_width);
            let velocity = inverse_kinematics(&twist, track_width);

            assert!(
                velocity.left().approx_eq(left, MARGIN),
                "Expected {:.5} and {:.5} to be equal within 1e-9",
                velocity.left(),
                left
            );
            assert!(velocity.right().approx_eq(right, MARGIN));
        }
    }
}

#[test]
fn when_integrating_straight_motion_should_move_along_heading() {
    let pose = RigidTransform::from_xy_degrees(1.0, 1.0, 90.0);

    let result = integrate_wheel_deltas(&pose, 2.0, 2.0, 0.0);

    assert!(result.approx_eq(RigidTransform::from_xy_degrees(1.0, 3.0, 90.0), MARGIN));
}

#[test]
fn when_integrating_arc_should_follow_circle() {
    // Quarter circle with a radius of 1 for the robot center
    let track_width = 1.0;
    let left = 0.5 * PI * 0.5;
    let right = 0.5 * PI * 1.5;
    let twist = forward_kinematics_with_track(left, right, track_width);

    let result = integrate_forward_kinematics(&RigidTransform::identity(), &twist);

    assert!(result.approx_eq(RigidTransform::from_xy_degrees(1.0, 1.0, 90.0), MARGIN));
}
