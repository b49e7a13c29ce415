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
use super::range::*;
use crate::errors::*;
use na::RealField;
use nalgebra as na;

/// Lower/upper limits of every body joint
///
/// The support foot pose is not a motor driven joint, so it has no entry here.
/// Only per-joint range checks are done, there is no self collision check.
///
/// # Examples
///
/// ```
/// use support_foot::joint::{BodyJoints, JointBounds, JointId};
///
/// let bounds = JointBounds::<f64>::nao();
/// let mut joints = BodyJoints::standing();
/// assert_eq!(bounds.check(&joints), None);
///
/// joints[JointId::LKneePitch] = 3.0;
/// joints[JointId::HeadYaw] = 3.0;
/// // only the first violation is reported
/// assert_eq!(bounds.check(&joints), Some(JointId::LKneePitch));
/// ```
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct JointBounds<T: RealField + Copy> {
    ranges: [Range<T>; JOINTS_NUM],
}

impl<T> JointBounds<T>
where
    T: RealField + Copy,
{
    /// No limit at all
    pub fn unbounded() -> Self {
        JointBounds {
            ranges: [Range::unbounded(); JOINTS_NUM],
        }
    }
    /// Mechanical limits of NAO
    pub fn nao() -> Self {
        let mut bounds = Self::unbounded();
        let table: [(JointId, f64, f64); JOINTS_NUM] = [
            // left leg
            (JointId::LHipYawPitch, -1.145303, 0.740810),
            (JointId::LHipRoll, -0.379472, 0.790477),
            (JointId::LHipPitch, -1.773912, 0.484090),
            (JointId::LKneePitch, -0.092346, 2.112528),
            (JointId::LAnklePitch, -1.189516, 0.922747),
            (JointId::LAnkleRoll, -0.769001, 0.397880),
            // right leg
            (JointId::RHipYawPitch, -1.145303, 0.740810),
            (JointId::RHipRoll, -0.738321, 0.414754),
            (JointId::RHipPitch, -1.772308, 0.485624),
            (JointId::RKneePitch, -0.103083, 2.120198),
            (JointId::RAnklePitch, -1.186448, 0.932056),
            (JointId::RAnkleRoll, -0.388676, 0.785875),
            // left arm
            (JointId::LShoulderPitch, -2.085600, 2.085600),
            (JointId::LShoulderRoll, 0.008700, 1.649400),
            (JointId::LElbowYaw, -2.085600, 2.085600),
            (JointId::LElbowRoll, -1.562100, -0.008700),
            (JointId::LWristYaw, -1.823800, 1.823800),
            // right arm
            (JointId::RShoulderPitch, -2.085600, 2.085600),
            (JointId::RShoulderRoll, -1.649400, -0.008700),
            (JointId::RElbowYaw, -2.085600, 2.085600),
            (JointId::RElbowRoll, 0.008700, 1.562100),
            (JointId::RWristYaw, -1.823800, 1.823800),
            // head, the wide range is on HeadPitch in this table
            (JointId::HeadPitch, -2.085700, 2.085700),
            (JointId::HeadYaw, -0.672000, 0.514900),
        ];
        for (id, lower, upper) in table {
            bounds.set_bound(id, na::convert(lower), na::convert(upper));
        }
        bounds
    }
    /// Set the limits of one joint
    ///
    /// `lower <= upper` is expected but not checked. An inverted pair makes
    /// every position of the joint out of bounds.
    pub fn set_bound(&mut self, id: JointId, lower: T, upper: T) {
        self.ranges[id.index()] = Range::new(lower, upper);
    }
    /// Same as `set_bound` for callers which only know the index in the state vector
    ///
    /// # Examples
    ///
    /// ```
    /// let mut bounds = support_foot::joint::JointBounds::<f64>::nao();
    /// assert!(bounds.set_bound_by_index(3, -0.1, 2.0).is_ok());
    /// // support foot position is not a joint
    /// assert!(bounds.set_bound_by_index(24, -0.1, 2.0).is_err());
    /// ```
    pub fn set_bound_by_index(&mut self, index: usize, lower: T, upper: T) -> Result<(), Error> {
        let id = JointId::from_index(index).ok_or(Error::InvalidJointIndex {
            index,
            joints_num: JOINTS_NUM,
        })?;
        self.set_bound(id, lower, upper);
        Ok(())
    }
    #[inline]
    pub fn range(&self, id: JointId) -> Range<T> {
        self.ranges[id.index()]
    }
    /// Returns the first joint (in index order) which is out of its limits
    ///
    /// `None` means all the joints are valid. The limit values themselves are valid.
    pub fn check(&self, joints: &BodyJoints<T>) -> Option<JointId> {
        joints
            .iter()
            .find(|(id, position)| !self.range(*id).is_valid(*position))
            .map(|(id, _)| id)
    }
    /// All the joints out of their limits, in index order
    pub fn violations(&self, joints: &BodyJoints<T>) -> Vec<JointId> {
        joints
            .iter()
            .filter(|(id, position)| !self.range(*id).is_valid(*position))
            .map(|(id, _)| id)
            .collect()
    }
    /// Clamp all the joint positions into the limits
    pub fn clamp(&self, joints: &mut BodyJoints<T>) {
        for id in JointId::ALL {
            joints[id] = self.range(id).clamp(joints[id]);
        }
    }
}

impl<T> Default for JointBounds<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::nao()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violations_in_order() {
        let bounds = JointBounds::<f64>::nao();
        let mut joints = BodyJoints::standing();
        assert!(bounds.violations(&joints).is_empty());
        joints[JointId::RElbowRoll] = -1.0;
        joints[JointId::LHipRoll] = 1.0;
        assert_eq!(
            bounds.violations(&joints),
            vec![JointId::LHipRoll, JointId::RElbowRoll]
        );
        assert_eq!(bounds.check(&joints), Some(JointId::LHipRoll));
    }

    #[test]
    fn test_clamp() {
        let bounds = JointBounds::<f64>::nao();
        let mut joints = BodyJoints::standing();
        joints[JointId::HeadYaw] = 1.0;
        joints[JointId::LElbowRoll] = 0.5;
        bounds.clamp(&mut joints);
        assert_eq!(joints[JointId::HeadYaw], 0.5149);
        assert_eq!(joints[JointId::LElbowRoll], -0.0087);
        assert_eq!(bounds.check(&joints), None);
    }

    #[test]
    fn test_inverted_bound() {
        let mut bounds = JointBounds::<f64>::unbounded();
        bounds.set_bound(JointId::HeadPitch, 1.0, -1.0);
        let joints = BodyJoints::zeros();
        assert_eq!(bounds.check(&joints), Some(JointId::HeadPitch));
    }
}
