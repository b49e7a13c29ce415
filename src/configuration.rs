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
use crate::errors::*;
use crate::joint::*;
use crate::transform::*;
use na::{Matrix3, Matrix4, Point3, RealField, Vector3};
use nalgebra as na;

/// Pose of the support foot in the world (inertial) frame
///
/// This is the anchor of all the other poses. It is not a motor driven joint,
/// so the joint limits are never applied to it.
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct SupportAnchor<T: RealField + Copy> {
    pub position: Vector3<T>,
    pub orientation: Matrix3<T>,
}

impl<T> SupportAnchor<T>
where
    T: RealField + Copy,
{
    pub fn new(position: Vector3<T>, orientation: Matrix3<T>) -> Self {
        SupportAnchor {
            position,
            orientation,
        }
    }
    /// Support foot at the origin of the world frame
    pub fn identity() -> Self {
        Self::new(Vector3::zeros(), Matrix3::identity())
    }
    pub fn from_homogeneous(pose: &Matrix4<T>) -> Self {
        Self::new(extract_translation(pose), extract_rotation(pose))
    }
    pub fn to_homogeneous(&self) -> Matrix4<T> {
        homogeneous_from_parts(&self.position, &self.orientation)
    }
    /// Express a point of the support foot frame in the world frame
    pub fn transform_point(&self, point: &Point3<T>) -> Point3<T> {
        Point3::from(self.orientation * point.coords + self.position)
    }
}

impl<T> Default for SupportAnchor<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::identity()
    }
}

/// Whole kinematic configuration of the robot
///
/// It is the body joint positions plus the world pose of the support foot.
/// `to_flat` / `from_flat` give the classic flat state vector layout:
///
/// | index      | contents                                      |
/// |------------|-----------------------------------------------|
/// | `0..24`    | body joints in `JointId` order                |
/// | `24..27`   | support foot position (x, y, z)               |
/// | `27..36`   | support foot orientation, column-major 3x3    |
///
/// # Examples
///
/// ```
/// use support_foot::*;
///
/// let mut config = Configuration::<f64>::default();
/// config.set_base_pose(0.0, 0.1, 0.0, 0.0, 0.0, std::f64::consts::FRAC_PI_2);
/// let flat = config.to_flat();
/// assert_eq!(flat.len(), joint::STATE_VAR_NUM);
/// assert_eq!(flat[joint::SUPPORT_FOOT_POS_START + 1], 0.1);
/// assert_eq!(Configuration::from_flat(&flat).unwrap(), config);
/// ```
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct Configuration<T: RealField + Copy> {
    pub joints: BodyJoints<T>,
    pub anchor: SupportAnchor<T>,
}

impl<T> Configuration<T>
where
    T: RealField + Copy,
{
    pub fn new(joints: BodyJoints<T>, anchor: SupportAnchor<T>) -> Self {
        Configuration { joints, anchor }
    }
    /// Build from the flat state vector (`STATE_VAR_NUM` values)
    pub fn from_flat(state: &[T]) -> Result<Self, Error> {
        if state.len() != STATE_VAR_NUM {
            return Err(Error::SizeMismatchError {
                input: state.len(),
                required: STATE_VAR_NUM,
            });
        }
        let joints = BodyJoints::from_slice(&state[..JOINTS_NUM])?;
        let position = &state[SUPPORT_FOOT_POS_START..SUPPORT_FOOT_ORIENTATION_START];
        let orientation = &state[SUPPORT_FOOT_ORIENTATION_START..STATE_VAR_NUM];
        let anchor = SupportAnchor::new(
            Vector3::from_column_slice(position),
            Matrix3::from_column_slice(orientation),
        );
        Ok(Self::new(joints, anchor))
    }
    /// Flat state vector, see the table of `Configuration`
    pub fn to_flat(&self) -> Vec<T> {
        let mut state = Vec::with_capacity(STATE_VAR_NUM);
        state.extend_from_slice(self.joints.as_slice());
        state.extend_from_slice(self.anchor.position.as_slice());
        state.extend_from_slice(self.anchor.orientation.as_slice());
        state
    }
    /// Sets the pose of the base (the support foot) in the world frame
    ///
    /// This does not move the robot. It only redefines where the support foot
    /// is, for the first placement or after an external localization.
    pub fn set_base_pose(&mut self, x: T, y: T, z: T, roll: T, pitch: T, yaw: T) {
        self.set_anchor(Vector3::new(x, y, z), euler_to_rotation(roll, pitch, yaw));
    }
    pub fn set_anchor(&mut self, position: Vector3<T>, orientation: Matrix3<T>) {
        self.anchor = SupportAnchor::new(position, orientation);
    }
    #[inline]
    pub fn joint_position(&self, id: JointId) -> T {
        self.joints[id]
    }
    /// Set the position without checking the limits
    #[inline]
    pub fn set_joint_position_unchecked(&mut self, id: JointId, position: T) {
        self.joints[id] = position;
    }
    pub fn set_joint_positions_unchecked(&mut self, positions: &[T]) -> Result<(), Error> {
        self.joints.set_all(positions)
    }
    /// First joint out of `bounds`, see `JointBounds::check`
    pub fn check_bounds(&self, bounds: &JointBounds<T>) -> Option<JointId> {
        bounds.check(&self.joints)
    }
}

impl<T> Default for Configuration<T>
where
    T: RealField + Copy,
{
    /// Standing posture on the origin of the world frame
    fn default() -> Self {
        Self::new(BodyJoints::standing(), SupportAnchor::identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_size() {
        assert!(matches!(
            Configuration::<f64>::from_flat(&[0.0; 24]),
            Err(Error::SizeMismatchError {
                input: 24,
                required: 36
            })
        ));
    }

    #[test]
    fn test_flat_layout() {
        let mut config = Configuration::<f64>::default();
        config.set_anchor(
            Vector3::new(1.0, 2.0, 3.0),
            Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0),
        );
        let flat = config.to_flat();
        assert_eq!(&flat[..JOINTS_NUM], config.joints.as_slice());
        assert_eq!(&flat[24..27], &[1.0, 2.0, 3.0]);
        // column-major
        assert_eq!(&flat[27..30], &[1.0, 4.0, 7.0]);
        assert_eq!(&flat[33..36], &[3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_set_base_pose_keeps_joints() {
        let mut config = Configuration::<f64>::default();
        config.set_joint_position_unchecked(JointId::HeadYaw, 0.3);
        config.set_base_pose(0.5, -0.2, 0.1, 0.0, 0.0, 0.7);
        assert_eq!(config.joint_position(JointId::HeadYaw), 0.3);
        assert_eq!(config.anchor.position, Vector3::new(0.5, -0.2, 0.1));
        assert_eq!(config.anchor.orientation, euler_to_rotation(0.0, 0.0, 0.7));
        let p = config.anchor.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!((p.x - (0.5 + 0.7f64.cos())).abs() < 1e-12);
        assert!((p.y - (-0.2 + 0.7f64.sin())).abs() < 1e-12);
    }
}
