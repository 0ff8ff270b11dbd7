use super::*;

fn create_trajectory(count: usize) -> Trajectory {
    let mut trajectory = Trajectory::with_capacity(count);
    for i in 0..count {
        let time = 0.1 * (i + 1) as f64;
        trajectory
            .push(TrajectoryPoint::new(time * time, 2.0 * time, 2.0, time))
            .unwrap();
    }

    trajectory
}

#[test]
fn when_creating_trajectory_should_be_empty() {
    let trajectory = Trajectory::with_capacity(10);

    assert!(trajectory.is_empty());
    assert_eq!(0, trajectory.len());
    assert_eq!(10, trajectory.capacity());
    assert_eq!(0.0, trajectory.duration());
    assert!(trajectory.last().is_none());
    assert!(trajectory.get_clamped(3).is_none());
}

#[test]
fn when_pushing_points_should_keep_insertion_order() {
    let trajectory = create_trajectory(5);

    assert_eq!(5, trajectory.len());
    let times: Vec<f64> = trajectory.iter().map(|p| p.time()).collect();
    for pair in times.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(trajectory.points()[4], *trajectory.last().unwrap());
    assert_eq!(trajectory.get(4).unwrap().time(), trajectory.duration());
}

#[test]
fn when_pushing_past_capacity_should_fail() {
    let mut trajectory = create_trajectory(2);

    let result = trajectory.push(TrajectoryPoint::default());

    assert_eq!(
        Err(Error::TrajectoryCapacityExceeded { capacity: 2 }),
        result
    );
    assert_eq!(2, trajectory.len());
}

#[test]
fn when_getting_clamped_past_end_should_return_last_point() {
    let trajectory = create_trajectory(3);

    assert_eq!(trajectory.get(1), trajectory.get_clamped(1));
    assert_eq!(trajectory.last(), trajectory.get_clamped(3));
    assert_eq!(trajectory.last(), trajectory.get_clamped(100));
    assert!(trajectory.get(3).is_none());
}

#[test]
fn when_scaling_should_scale_position_and_velocity_only() {
    let lead = create_trajectory(4);

    let follow = lead.scaled(0.5);

    assert_eq!(lead.len(), follow.len());
    for (lead_point, follow_point) in lead.iter().zip(&follow) {
        assert_eq!(0.5 * lead_point.pos(), follow_point.pos());
        assert_eq!(0.5 * lead_point.vel(), follow_point.vel());
        assert_eq!(lead_point.acc(), follow_point.acc());
        assert_eq!(lead_point.time(), follow_point.time());
    }
}
