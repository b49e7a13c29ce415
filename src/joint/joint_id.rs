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
use crate::errors::*;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Number of the body joints
pub const JOINTS_NUM: usize = 24;
/// Number of the position entries of the support foot
pub const SUPPORT_FOOT_POS_NUM: usize = 3;
/// Number of the orientation entries of the support foot (3x3 matrix)
pub const SUPPORT_FOOT_ORIENTATION_NUM: usize = 9;
/// Length of the whole state vector
pub const STATE_VAR_NUM: usize = JOINTS_NUM + SUPPORT_FOOT_POS_NUM + SUPPORT_FOOT_ORIENTATION_NUM;
/// Index of the first position entry of the support foot
pub const SUPPORT_FOOT_POS_START: usize = JOINTS_NUM;
/// Index of the first orientation entry of the support foot
pub const SUPPORT_FOOT_ORIENTATION_START: usize = SUPPORT_FOOT_POS_START + SUPPORT_FOOT_POS_NUM;

/// Body joints of NAO, in the order of the state vector
///
/// # Examples
///
/// ```
/// use support_foot::joint::JointId;
///
/// assert_eq!(JointId::LKneePitch.index(), 3);
/// assert_eq!(JointId::from_index(3), Some(JointId::LKneePitch));
/// assert_eq!("HeadYaw".parse::<JointId>().unwrap(), JointId::HeadYaw);
/// ```
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JointId {
    LHipYawPitch,
    LHipRoll,
    LHipPitch,
    LKneePitch,
    LAnklePitch,
    LAnkleRoll,
    RHipYawPitch,
    RHipRoll,
    RHipPitch,
    RKneePitch,
    RAnklePitch,
    RAnkleRoll,
    LShoulderPitch,
    LShoulderRoll,
    LElbowYaw,
    LElbowRoll,
    LWristYaw,
    RShoulderPitch,
    RShoulderRoll,
    RElbowYaw,
    RElbowRoll,
    RWristYaw,
    HeadPitch,
    HeadYaw,
}

impl JointId {
    /// All the body joints in ascending index order
    pub const ALL: [JointId; JOINTS_NUM] = [
        JointId::LHipYawPitch,
        JointId::LHipRoll,
        JointId::LHipPitch,
        JointId::LKneePitch,
        JointId::LAnklePitch,
        JointId::LAnkleRoll,
        JointId::RHipYawPitch,
        JointId::RHipRoll,
        JointId::RHipPitch,
        JointId::RKneePitch,
        JointId::RAnklePitch,
        JointId::RAnkleRoll,
        JointId::LShoulderPitch,
        JointId::LShoulderRoll,
        JointId::LElbowYaw,
        JointId::LElbowRoll,
        JointId::LWristYaw,
        JointId::RShoulderPitch,
        JointId::RShoulderRoll,
        JointId::RElbowYaw,
        JointId::RElbowRoll,
        JointId::RWristYaw,
        JointId::HeadPitch,
        JointId::HeadYaw,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns `None` for the indices of the support foot region
    pub fn from_index(index: usize) -> Option<JointId> {
        JointId::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            JointId::LHipYawPitch => "LHipYawPitch",
            JointId::LHipRoll => "LHipRoll",
            JointId::LHipPitch => "LHipPitch",
            JointId::LKneePitch => "LKneePitch",
            JointId::LAnklePitch => "LAnklePitch",
            JointId::LAnkleRoll => "LAnkleRoll",
            JointId::RHipYawPitch => "RHipYawPitch",
            JointId::RHipRoll => "RHipRoll",
            JointId::RHipPitch => "RHipPitch",
            JointId::RKneePitch => "RKneePitch",
            JointId::RAnklePitch => "RAnklePitch",
            JointId::RAnkleRoll => "RAnkleRoll",
            JointId::LShoulderPitch => "LShoulderPitch",
            JointId::LShoulderRoll => "LShoulderRoll",
            JointId::LElbowYaw => "LElbowYaw",
            JointId::LElbowRoll => "LElbowRoll",
            JointId::LWristYaw => "LWristYaw",
            JointId::RShoulderPitch => "RShoulderPitch",
            JointId::RShoulderRoll => "RShoulderRoll",
            JointId::RElbowYaw => "RElbowYaw",
            JointId::RElbowRoll => "RElbowRoll",
            JointId::RWristYaw => "RWristYaw",
            JointId::HeadPitch => "HeadPitch",
            JointId::HeadYaw => "HeadYaw",
        }
    }
}

impl Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for JointId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JointId::ALL
            .iter()
            .find(|id| id.name() == s)
            .copied()
            .ok_or_else(|| Error::UnknownJointName(s.to_owned()))
    }
}

#[test]
fn test_joint_id_order() {
    for (i, id) in JointId::ALL.iter().enumerate() {
        assert_eq!(id.index(), i);
        assert_eq!(JointId::from_index(i), Some(*id));
        assert_eq!(id.name().parse::<JointId>().unwrap(), *id);
    }
    assert_eq!(JointId::from_index(SUPPORT_FOOT_POS_START), None);
    assert!("LToe".parse::<JointId>().is_err());
    assert_eq!(STATE_VAR_NUM, 36);
    assert_eq!(SUPPORT_FOOT_ORIENTATION_START, 27);
}
