/*
  Copyright 2017 Takashi Ogura

  Licensed under the Apache License, Version 2.0 (the "License");
  you may not use this file except in compliance with the License.
  You may obtain a copy of the License at

      http://www.apache.org/licenses/LICENSE-2.0

  Unless required by applicable law or agreed to in writing, software
  distributed under the License is distributed on an "AS IS" BASIS,
  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
  See the License for the specific language governing permissions and
  limitations under the License.
*/
//! Homogeneous transform helpers
//!
//! All the matrices use the nalgebra convention: column vectors, and the
//! translation of a homogeneous matrix lives in the last column. Angles are
//! radians. Euler angles are applied around the current axes in the order
//! X (roll) -> Y (pitch) -> Z (yaw), so the rotation is `Rx * Ry * Rz`.
use na::{
    Isometry3, Matrix3, Matrix4, RealField, Rotation3, Translation3, UnitQuaternion, Vector3,
};
use nalgebra as na;

/// Relative offset of a frame: translation and X -> Y -> Z Euler angles
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Offset<T: RealField + Copy> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub roll: T,
    pub pitch: T,
    pub yaw: T,
}

impl<T> Offset<T>
where
    T: RealField + Copy,
{
    pub fn new(x: T, y: T, z: T, roll: T, pitch: T, yaw: T) -> Self {
        Offset {
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
        }
    }
    /// Offset which does nothing
    pub fn zero() -> Self {
        Self::new(
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
            T::zero(),
        )
    }
    /// Pure translation offset
    pub fn translation(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::zero(), T::zero(), T::zero())
    }
    /// Pure rotation offset
    pub fn rotation(roll: T, pitch: T, yaw: T) -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), roll, pitch, yaw)
    }
}

/// Forms the rotation matrix of roll-pitch-yaw angles
///
/// The rotation is formed by first applying a rotation around the x axis
/// (roll), then around the new y axis (pitch) and finally around the new z
/// axis (yaw).
///
/// # Examples
///
/// ```
/// use support_foot::transform::euler_to_rotation;
///
/// let rot = euler_to_rotation(0.0, 0.0, std::f64::consts::FRAC_PI_2);
/// let x = rot * nalgebra::Vector3::x();
/// assert!((x.y - 1.0).abs() < 1e-12);
/// ```
pub fn euler_to_rotation<T>(roll: T, pitch: T, yaw: T) -> Matrix3<T>
where
    T: RealField + Copy,
{
    let (sr, cr) = (roll.sin(), roll.cos());
    let (sp, cp) = (pitch.sin(), pitch.cos());
    let (sy, cy) = (yaw.sin(), yaw.cos());

    Matrix3::new(
        cp * cy,
        -cp * sy,
        sp,
        sr * sp * cy + cr * sy,
        -sr * sp * sy + cr * cy,
        -sr * cp,
        -cr * sp * cy + sr * sy,
        cr * sp * sy + sr * cy,
        cr * cp,
    )
}

/// Same rotation as [`euler_to_rotation`] with the translation `(x, y, z)`
pub fn euler_to_homogeneous<T>(x: T, y: T, z: T, roll: T, pitch: T, yaw: T) -> Matrix4<T>
where
    T: RealField + Copy,
{
    let rotation = euler_to_rotation(roll, pitch, yaw);
    homogeneous_from_parts(&Vector3::new(x, y, z), &rotation)
}

/// Put a translation and a rotation into one homogeneous matrix
pub fn homogeneous_from_parts<T>(translation: &Vector3<T>, rotation: &Matrix3<T>) -> Matrix4<T>
where
    T: RealField + Copy,
{
    let mut pose = Matrix4::identity();
    pose.fixed_view_mut::<3, 3>(0, 0).copy_from(rotation);
    pose.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
    pose
}

/// Given a pose and an offset, returns the pose which includes the offset
///
/// The offset is expressed in the local frame of `base`, so this is
/// `base * euler_to_homogeneous(offset)`.
///
/// # Examples
///
/// ```
/// use support_foot::transform::*;
///
/// let base = euler_to_homogeneous(0.0, 0.0, 1.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2);
/// let moved = compose_offset(&base, &Offset::translation(0.1, 0.0, 0.0));
/// let t = extract_translation(&moved);
/// // x of the local frame is y of the world frame
/// assert!(t.x.abs() < 1e-12);
/// assert!((t.y - 0.1).abs() < 1e-12);
/// assert!((t.z - 1.0).abs() < 1e-12);
/// ```
pub fn compose_offset<T>(base: &Matrix4<T>, offset: &Offset<T>) -> Matrix4<T>
where
    T: RealField + Copy,
{
    base * euler_to_homogeneous(
        offset.x,
        offset.y,
        offset.z,
        offset.roll,
        offset.pitch,
        offset.yaw,
    )
}

/// Rotation only version of [`compose_offset`]
pub fn compose_rotation_offset<T>(base: &Matrix3<T>, roll: T, pitch: T, yaw: T) -> Matrix3<T>
where
    T: RealField + Copy,
{
    base * euler_to_rotation(roll, pitch, yaw)
}

/// Rotation block of a homogeneous matrix, the translation is dropped
pub fn extract_rotation<T>(pose: &Matrix4<T>) -> Matrix3<T>
where
    T: RealField + Copy,
{
    pose.fixed_view::<3, 3>(0, 0).into_owned()
}

/// Translation column of a homogeneous matrix
pub fn extract_translation<T>(pose: &Matrix4<T>) -> Vector3<T>
where
    T: RealField + Copy,
{
    pose.fixed_view::<3, 1>(0, 3).into_owned()
}

/// Roll-pitch-yaw angles of a rotation built by [`euler_to_rotation`]
///
/// The result is unique only while `pitch` is inside (-pi/2, pi/2).
pub fn rotation_to_euler<T>(rotation: &Matrix3<T>) -> Vector3<T>
where
    T: RealField + Copy,
{
    let sp = rotation[(0, 2)].max(-T::one()).min(T::one());
    let roll = (-rotation[(1, 2)]).atan2(rotation[(2, 2)]);
    let pitch = sp.asin();
    let yaw = (-rotation[(0, 1)]).atan2(rotation[(0, 0)]);
    Vector3::new(roll, pitch, yaw)
}

pub fn isometry_to_homogeneous<T>(isometry: &Isometry3<T>) -> Matrix4<T>
where
    T: RealField + Copy,
{
    isometry.to_homogeneous()
}

/// Convert a homogeneous matrix to `Isometry3`
///
/// The rotation block is assumed to be orthonormal.
pub fn homogeneous_to_isometry<T>(pose: &Matrix4<T>) -> Isometry3<T>
where
    T: RealField + Copy,
{
    let rotation = Rotation3::from_matrix_unchecked(extract_rotation(pose));
    Isometry3::from_parts(
        Translation3::from(extract_translation(pose)),
        UnitQuaternion::from_rotation_matrix(&rotation),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_euler_to_rotation_single_axis() {
        let rx = euler_to_rotation(0.3, 0.0, 0.0);
        let expected = Rotation3::from_axis_angle(&Vector3::x_axis(), 0.3);
        assert!((rx - expected.matrix()).norm() < 1e-12);

        let ry = euler_to_rotation(0.0, -0.7, 0.0);
        let expected = Rotation3::from_axis_angle(&Vector3::y_axis(), -0.7);
        assert!((ry - expected.matrix()).norm() < 1e-12);

        let rz = euler_to_rotation(0.0, 0.0, 1.2);
        let expected = Rotation3::from_axis_angle(&Vector3::z_axis(), 1.2);
        assert!((rz - expected.matrix()).norm() < 1e-12);
    }

    #[test]
    fn test_euler_order_is_intrinsic_xyz() {
        let (r, p, y) = (0.1, 0.2, 0.3);
        let composed = Rotation3::from_axis_angle(&Vector3::x_axis(), r)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), p)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), y);
        let rot = euler_to_rotation(r, p, y);
        assert!((rot - composed.matrix()).norm() < 1e-12);
    }

    #[test]
    fn test_euler_to_homogeneous() {
        let pose = euler_to_homogeneous(1.0, 2.0, 3.0, 0.0, 0.0, FRAC_PI_2);
        assert_eq!(extract_translation(&pose), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(pose[(3, 3)], 1.0);
        assert_eq!(pose[(3, 0)], 0.0);
        let expected = euler_to_rotation(0.0, 0.0, FRAC_PI_2);
        assert!((extract_rotation(&pose) - expected).norm() < 1e-15);
    }

    #[test]
    fn test_compose_is_not_addition() {
        let base = euler_to_homogeneous(0.0, 0.0, 0.0, FRAC_PI_2, 0.0, 0.0);
        let pose = compose_offset(&base, &Offset::translation(0.0, 1.0, 0.0));
        // local y turns into world z after the roll
        let t = extract_translation(&pose);
        assert!(t.y.abs() < 1e-12);
        assert!((t.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_rotation_offset() {
        let base = euler_to_rotation(0.2, 0.0, 0.0);
        let rot = compose_rotation_offset(&base, 0.3, 0.0, 0.0);
        assert!((rot - euler_to_rotation(0.5, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_to_euler() {
        let rpy = rotation_to_euler(&euler_to_rotation(0.1f64, -0.4, 2.5));
        assert!((rpy.x - 0.1).abs() < 1e-12);
        assert!((rpy.y + 0.4).abs() < 1e-12);
        assert!((rpy.z - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_isometry_bridge() {
        let pose = euler_to_homogeneous(0.1f64, -0.2, 0.3, 0.4, 0.5, -0.6);
        let iso = homogeneous_to_isometry(&pose);
        assert!((isometry_to_homogeneous(&iso) - pose).norm() < 1e-12);
    }
}
