use super::*;

#[test]
fn when_creating_twist_should_store_components() {
    let twist = Twist::new(1.0, -2.0, 0.5);

    assert_eq!(1.0, twist.dx());
    assert_eq!(-2.0, twist.dy());
    assert_eq!(0.5, twist.dtheta());
}

#[test]
fn when_creating_zero_twist_should_match_default() {
    assert_eq!(Twist::default(), Twist::zero());
    assert_eq!(0.0, Twist::zero().dtheta());
}

#[test]
fn when_scaling_twist_should_scale_all_components() {
    let twist = Twist::new(1.0, -2.0, 0.5).scale(4.0);

    assert_eq!(Twist::new(4.0, -8.0, 2.0), twist);
}
