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
use super::joint_id::*;
use crate::errors::*;
use na::RealField;
use nalgebra as na;
use std::ops::{Index, IndexMut};

/// Positions (angles) of all the body joints, indexed by `JointId`
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct BodyJoints<T: RealField + Copy> {
    positions: [T; JOINTS_NUM],
}

impl<T> BodyJoints<T>
where
    T: RealField + Copy,
{
    /// All joints at zero
    pub fn zeros() -> Self {
        BodyJoints {
            positions: [T::zero(); JOINTS_NUM],
        }
    }
    /// Standard initial posture: slightly bent knees, arms along the body
    ///
    /// # Examples
    ///
    /// ```
    /// use support_foot::joint::{BodyJoints, JointId};
    ///
    /// let joints = BodyJoints::<f64>::standing();
    /// assert_eq!(joints[JointId::LKneePitch], 0.698132);
    /// assert_eq!(joints[JointId::HeadYaw], 0.0);
    /// ```
    pub fn standing() -> Self {
        let mut joints = Self::zeros();
        let posture: [(JointId, f64); JOINTS_NUM] = [
            // left leg
            (JointId::LHipYawPitch, 0.0),
            (JointId::LHipRoll, 0.0),
            (JointId::LHipPitch, -0.436332),
            (JointId::LKneePitch, 0.698132),
            (JointId::LAnklePitch, -0.349066),
            (JointId::LAnkleRoll, 0.0),
            // right leg
            (JointId::RHipYawPitch, 0.0),
            (JointId::RHipRoll, 0.0),
            (JointId::RHipPitch, -0.436332),
            (JointId::RKneePitch, 0.698132),
            (JointId::RAnklePitch, -0.349066),
            (JointId::RAnkleRoll, 0.0),
            // left arm
            (JointId::LShoulderPitch, 1.396263),
            (JointId::LShoulderRoll, 0.349066),
            (JointId::LElbowYaw, -1.396263),
            (JointId::LElbowRoll, -1.047198),
            (JointId::LWristYaw, 0.0),
            // right arm
            (JointId::RShoulderPitch, 1.396263),
            (JointId::RShoulderRoll, -0.349066),
            (JointId::RElbowYaw, 1.396263),
            (JointId::RElbowRoll, 1.047198),
            (JointId::RWristYaw, 0.0),
            // head
            (JointId::HeadPitch, 0.0),
            (JointId::HeadYaw, 0.0),
        ];
        for (id, position) in posture {
            joints[id] = na::convert(position);
        }
        joints
    }
    /// Create from the positions in `JointId` order
    pub fn from_slice(positions: &[T]) -> Result<Self, Error> {
        let mut joints = Self::zeros();
        joints.set_all(positions)?;
        Ok(joints)
    }
    #[inline]
    pub fn get(&self, id: JointId) -> T {
        self.positions[id.index()]
    }
    #[inline]
    pub fn set(&mut self, id: JointId, position: T) {
        self.positions[id.index()] = position;
    }
    /// Overwrite all the positions, `positions` must have `JOINTS_NUM` values
    pub fn set_all(&mut self, positions: &[T]) -> Result<(), Error> {
        if positions.len() != JOINTS_NUM {
            return Err(Error::SizeMismatchError {
                input: positions.len(),
                required: JOINTS_NUM,
            });
        }
        self.positions.copy_from_slice(positions);
        Ok(())
    }
    pub fn as_slice(&self) -> &[T] {
        &self.positions
    }
    /// Iterate `(JointId, position)` in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (JointId, T)> + '_ {
        JointId::ALL.iter().map(move |id| (*id, self.get(*id)))
    }
}

impl<T> Default for BodyJoints<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::standing()
    }
}

impl<T> Index<JointId> for BodyJoints<T>
where
    T: RealField + Copy,
{
    type Output = T;

    fn index(&self, id: JointId) -> &T {
        &self.positions[id.index()]
    }
}

impl<T> IndexMut<JointId> for BodyJoints<T>
where
    T: RealField + Copy,
{
    fn index_mut(&mut self, id: JointId) -> &mut T {
        &mut self.positions[id.index()]
    }
}

#[test]
fn test_set_all_size() {
    let mut joints = BodyJoints::<f64>::zeros();
    assert!(joints.set_all(&[0.0; 3]).is_err());
    let positions: Vec<f64> = (0..JOINTS_NUM).map(|i| i as f64 * 0.01).collect();
    joints.set_all(&positions).unwrap();
    assert_eq!(joints.as_slice(), positions.as_slice());
    assert_eq!(joints[JointId::HeadYaw], positions[23]);
    assert_eq!(joints.iter().count(), JOINTS_NUM);
}
