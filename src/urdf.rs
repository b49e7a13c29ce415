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
//! Load the joint limits from [URDF](http://wiki.ros.org/urdf)
//!
//! `support_foot::urdf` uses [urdf-rs](http://github.com/openrr/urdf-rs) to load the urdf model.
//! Joints are matched by their NAO names (`LHipYawPitch`, `HeadYaw`, ...).
//!
//! # Examples
//!
//! ```
//! use support_foot::joint::{JointBounds, JointId};
//!
//! let bounds = JointBounds::<f64>::from_urdf_file("urdf/nao_head.urdf").unwrap();
//! assert_eq!(bounds.range(JointId::HeadYaw).max, 0.5149);
//! ```
use crate::errors::*;
use crate::joint::*;
use na::RealField;
use nalgebra as na;
use std::path::Path;
use tracing::warn;

impl<T> JointBounds<T>
where
    T: RealField + Copy,
{
    /// Limits of the revolute joints of `robot`
    ///
    /// Joints missing in `robot` have no limit. Continuous joints have no limit.
    pub fn from_urdf(robot: &urdf_rs::Robot) -> Self {
        let mut bounds = Self::unbounded();
        for joint in &robot.joints {
            let id = match joint.name.parse::<JointId>() {
                Ok(id) => id,
                Err(_) => {
                    if !matches!(joint.joint_type, urdf_rs::JointType::Fixed) {
                        warn!("joint {} is not a body joint, skipped", joint.name);
                    }
                    continue;
                }
            };
            match joint.joint_type {
                urdf_rs::JointType::Revolute => bounds.set_bound(
                    id,
                    na::convert(joint.limit.lower),
                    na::convert(joint.limit.upper),
                ),
                urdf_rs::JointType::Continuous => {}
                _ => warn!("joint {} is not revolute, skipped", joint.name),
            }
        }
        bounds
    }
    /// Load the urdf file and read the limits, see `from_urdf`
    pub fn from_urdf_file<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        Ok(Self::from_urdf(&urdf_rs::read_file(path)?))
    }
}

impl<T> From<&urdf_rs::Robot> for JointBounds<T>
where
    T: RealField + Copy,
{
    fn from(robot: &urdf_rs::Robot) -> Self {
        Self::from_urdf(robot)
    }
}
