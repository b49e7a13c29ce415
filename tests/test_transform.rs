use nalgebra::{Matrix3, Matrix4};
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use support_foot::transform::*;

#[test]
fn test_rotation_is_orthonormal() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    for _ in 0..1000 {
        let roll = rng.gen_range(-PI..=PI);
        let pitch = rng.gen_range(-PI..=PI);
        let yaw = rng.gen_range(-PI..=PI);
        let rot = euler_to_rotation(roll, pitch, yaw);
        assert!(
            (rot * rot.transpose() - Matrix3::identity()).norm() < 1e-9,
            "not orthonormal for {:?}",
            (roll, pitch, yaw)
        );
        assert!((rot.determinant() - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_compose_keeps_orthonormal() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let mut rot = Matrix3::identity();
    for _ in 0..1000 {
        rot = compose_rotation_offset(
            &rot,
            rng.gen_range(-PI..=PI),
            rng.gen_range(-PI..=PI),
            rng.gen_range(-PI..=PI),
        );
    }
    assert!((rot * rot.transpose() - Matrix3::identity()).norm() < 1e-9);
}

#[test]
fn test_zero_offset_is_identity() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(2);
    for _ in 0..100 {
        let pose = euler_to_homogeneous(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-PI..=PI),
            rng.gen_range(-PI..=PI),
            rng.gen_range(-PI..=PI),
        );
        let composed = compose_offset(&pose, &Offset::zero());
        assert!((composed - pose).norm() < 1e-12);
        let rot = extract_rotation(&pose);
        let unchanged = compose_rotation_offset(&rot, 0.0, 0.0, 0.0);
        assert!((unchanged - rot).norm() < 1e-12);
    }
}

#[test]
fn test_offset_is_in_local_frame() {
    let base = euler_to_homogeneous(1.0, 0.0, 0.0, 0.0, 0.0, PI / 2.0);
    let offset = Offset::new(1.0, 0.0, 0.0, 0.0, 0.0, PI / 2.0);
    let pose = compose_offset(&base, &offset);
    let t = extract_translation(&pose);
    assert!((t.x - 1.0).abs() < 1e-12);
    assert!((t.y - 1.0).abs() < 1e-12);
    let rot = extract_rotation(&pose);
    assert!((rot[(0, 0)] + 1.0).abs() < 1e-12);
    assert!((rot[(1, 1)] + 1.0).abs() < 1e-12);

    // same as the plain matrix product
    let expected: Matrix4<f64> = base * euler_to_homogeneous(1.0, 0.0, 0.0, 0.0, 0.0, PI / 2.0);
    assert_eq!(pose, expected);
}

#[test]
fn test_f32() {
    let rot = euler_to_rotation(0.1f32, 0.2, 0.3);
    assert!((rot * rot.transpose() - Matrix3::identity()).norm() < 1e-5);
}
