/*
  Copyright 2020 Takashi Ogura

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
use super::body_joints::*;
use super::joint_id::*;
use nalgebra::{RealField, Unit, UnitQuaternion, Vector3};

/// Type of a joint in a kinematic chain, `Fixed` or `Rotational`
#[derive(Copy, Debug, Clone)]
pub enum JointType<T: RealField + Copy> {
    /// Fixed joint. It has no position and axis.
    Fixed,
    /// Rotational joint around axis, driven by the body joint `id` [rad].
    Rotational {
        /// axis of the joint
        axis: Unit<Vector3<T>>,
        /// which body joint drives this
        id: JointId,
    },
}

impl<T> JointType<T>
where
    T: RealField + Copy,
{
    /// Rotation made by this joint for the current joint positions
    ///
    /// # Examples
    ///
    /// ```
    /// use support_foot::joint::*;
    /// use nalgebra::Vector3;
    ///
    /// let mut joints = BodyJoints::<f64>::zeros();
    /// joints[JointId::HeadYaw] = 0.5;
    /// let yaw = JointType::Rotational { axis: Vector3::z_axis(), id: JointId::HeadYaw };
    /// assert!((yaw.rotation(&joints).angle() - 0.5).abs() < 1e-12);
    /// let fixed = JointType::Fixed;
    /// assert_eq!(fixed.rotation(&joints).angle(), 0.0);
    /// ```
    pub fn rotation(&self, joints: &BodyJoints<T>) -> UnitQuaternion<T> {
        match self {
            JointType::Fixed => UnitQuaternion::identity(),
            JointType::Rotational { axis, id } => {
                UnitQuaternion::from_axis_angle(axis, joints[*id])
            }
        }
    }

    #[inline]
    pub fn is_movable(&self) -> bool {
        !matches!(self, JointType::Fixed)
    }
}
