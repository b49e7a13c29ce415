use support_foot::joint::*;
use support_foot::*;

const EPS: f64 = 1e-6;

#[test]
fn test_limits_are_inclusive() {
    let bounds = JointBounds::<f64>::nao();
    for id in JointId::ALL {
        let range = bounds.range(id);
        let mut joints = BodyJoints::standing();
        joints[id] = range.min;
        assert_eq!(bounds.check(&joints), None, "{} at min", id);
        joints[id] = range.max;
        assert_eq!(bounds.check(&joints), None, "{} at max", id);
        joints[id] = range.min - EPS;
        assert_eq!(bounds.check(&joints), Some(id), "{} below min", id);
        joints[id] = range.max + EPS;
        assert_eq!(bounds.check(&joints), Some(id), "{} above max", id);
    }
}

#[test]
fn test_first_violation_is_reported() {
    let bounds = JointBounds::<f64>::nao();
    let mut config = Configuration::default();
    let knee = JointId::from_index(3).unwrap();
    let ankle = JointId::from_index(7).unwrap();
    config.joints[knee] = 10.0;
    config.joints[ankle] = -10.0;
    assert_eq!(config.check_bounds(&bounds), Some(knee));
    // re-check after the correction
    config.joints[knee] = 0.5;
    assert_eq!(config.check_bounds(&bounds), Some(ankle));
    config.joints[ankle] = 0.0;
    assert_eq!(config.check_bounds(&bounds), None);
}

#[test]
fn test_anchor_is_not_checked() {
    let bounds = JointBounds::<f64>::nao();
    let mut config = Configuration::default();
    config.set_base_pose(100.0, -100.0, 50.0, 3.0, 3.0, 3.0);
    assert_eq!(config.check_bounds(&bounds), None);
}

#[test]
fn test_model_bounds() {
    let mut model = SupportFootModel::<f64, _>::nao();
    assert_eq!(model.check_bounds(), None);
    model.set_joint_position_unchecked(JointId::RHipRoll, 0.5);
    assert_eq!(model.check_bounds(), Some(JointId::RHipRoll));
    model.set_bound(JointId::RHipRoll, -0.8, 0.8);
    assert_eq!(model.check_bounds(), None);

    let err = model
        .set_joint_position(JointId::LShoulderRoll, -0.5)
        .unwrap_err();
    match err {
        Error::OutOfLimitError {
            joint_name,
            position,
            min_limit,
            max_limit,
        } => {
            assert_eq!(joint_name, "LShoulderRoll");
            assert_eq!(position, -0.5);
            assert_eq!(min_limit, 0.0087);
            assert_eq!(max_limit, 1.6494);
        }
        _ => panic!("unexpected error {}", err),
    }
}

#[test]
fn test_set_bound_by_index() {
    let mut bounds = JointBounds::<f64>::unbounded();
    bounds.set_bound_by_index(5, -0.1, 0.1).unwrap();
    assert_eq!(bounds.range(JointId::LAnkleRoll), Range::new(-0.1, 0.1));
    for index in JOINTS_NUM..STATE_VAR_NUM {
        assert!(matches!(
            bounds.set_bound_by_index(index, 0.0, 1.0),
            Err(Error::InvalidJointIndex { .. })
        ));
    }
}
