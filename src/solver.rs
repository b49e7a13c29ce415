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
use crate::configuration::*;
use na::{Matrix4, RealField, Vector3};
use nalgebra as na;

/// Forward kinematics of the chains starting at one of the feet
///
/// All the functions take the whole configuration, including the support
/// foot anchor, and return quantities in the world frame. They must be pure:
/// the same configuration always gives the same result.
pub trait ChainSolver<T>
where
    T: RealField + Copy,
{
    /// Pose of the right foot when the left foot is the anchor
    fn left_leg_to_right_leg(&self, config: &Configuration<T>) -> Matrix4<T>;
    /// Pose of the left foot when the right foot is the anchor
    fn right_leg_to_left_leg(&self, config: &Configuration<T>) -> Matrix4<T>;
    /// Pose of the torso when the left foot is the anchor
    fn left_leg_to_torso(&self, config: &Configuration<T>) -> Matrix4<T>;
    /// Pose of the torso when the right foot is the anchor
    fn right_leg_to_torso(&self, config: &Configuration<T>) -> Matrix4<T>;
    /// Center of mass when the left foot is the anchor
    fn left_leg_to_com(&self, config: &Configuration<T>) -> Vector3<T>;
    /// Center of mass when the right foot is the anchor
    fn right_leg_to_com(&self, config: &Configuration<T>) -> Vector3<T>;
}

impl<T, S> ChainSolver<T> for &S
where
    T: RealField + Copy,
    S: ChainSolver<T> + ?Sized,
{
    fn left_leg_to_right_leg(&self, config: &Configuration<T>) -> Matrix4<T> {
        (**self).left_leg_to_right_leg(config)
    }
    fn right_leg_to_left_leg(&self, config: &Configuration<T>) -> Matrix4<T> {
        (**self).right_leg_to_left_leg(config)
    }
    fn left_leg_to_torso(&self, config: &Configuration<T>) -> Matrix4<T> {
        (**self).left_leg_to_torso(config)
    }
    fn right_leg_to_torso(&self, config: &Configuration<T>) -> Matrix4<T> {
        (**self).right_leg_to_torso(config)
    }
    fn left_leg_to_com(&self, config: &Configuration<T>) -> Vector3<T> {
        (**self).left_leg_to_com(config)
    }
    fn right_leg_to_com(&self, config: &Configuration<T>) -> Vector3<T> {
        (**self).right_leg_to_com(config)
    }
}
