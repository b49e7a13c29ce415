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
use crate::errors::*;
use crate::joint::*;
use crate::nao::*;
use crate::solver::*;
use crate::transform::*;
use na::{Matrix3, Matrix4, RealField, Vector3};
use nalgebra as na;
use simba::scalar::SubsetOf;
use std::fmt::{self, Display};
use tracing::{debug, trace};

/// Which foot is the kinematic anchor
#[derive(Copy, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SupportFoot {
    #[default]
    Left,
    Right,
}

impl SupportFoot {
    /// The other foot
    pub fn opposite(self) -> SupportFoot {
        match self {
            SupportFoot::Left => SupportFoot::Right,
            SupportFoot::Right => SupportFoot::Left,
        }
    }
}

impl Display for SupportFoot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SupportFoot::Left => write!(f, "left"),
            SupportFoot::Right => write!(f, "right"),
        }
    }
}

/// Quantities computed from the configuration and the support foot
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct DerivedState<T: RealField + Copy> {
    /// World pose of the swing foot
    pub swing_foot: Matrix4<T>,
    /// World orientation of the torso
    pub torso_orientation: Matrix3<T>,
    /// World position of the center of mass
    pub com: Vector3<T>,
}

impl<T> DerivedState<T>
where
    T: RealField + Copy,
{
    pub fn swing_foot_position(&self) -> Vector3<T> {
        extract_translation(&self.swing_foot)
    }
}

/// Kinematic state of a biped, relative to its support foot
///
/// It owns the configuration (body joints and the world pose of the support
/// foot), which foot is the support foot, and a cache of the derived
/// quantities (swing foot, torso orientation and center of mass).
///
/// Any change of the joints or the anchor makes the cache stale. Reading a
/// stale cache is an error, call `refresh` first.
///
/// # Examples
///
/// ```
/// use support_foot::*;
/// use nalgebra::{Matrix3, Vector3};
///
/// let mut model = SupportFootModel::<f64, _>::nao();
/// model.init(SupportFoot::Left, &Vector3::zeros(), &Matrix3::identity());
///
/// let swing = model.swing_foot_position().unwrap();
/// // right foot is on the right side of the left foot
/// assert!(swing.y < 0.0);
///
/// // the swing foot touches down
/// model.switch_support_foot().unwrap();
/// assert_eq!(model.support_foot(), SupportFoot::Right);
/// assert!((model.configuration().anchor.position - swing).norm() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SupportFootModel<T, S>
where
    T: RealField + Copy,
    S: ChainSolver<T>,
{
    solver: S,
    bounds: JointBounds<T>,
    config: Configuration<T>,
    support_foot: SupportFoot,
    derived: Option<DerivedState<T>>,
    dirty: bool,
}

impl<T> SupportFootModel<T, NaoChainSolver<T>>
where
    T: RealField + Copy + SubsetOf<f64>,
{
    /// NAO model with its mechanical limits
    pub fn nao() -> Self {
        Self::new(NaoChainSolver::new(), JointBounds::nao())
    }
}

impl<T, S> SupportFootModel<T, S>
where
    T: RealField + Copy + SubsetOf<f64>,
    S: ChainSolver<T>,
{
    /// Create the model in the standing posture, supported by the left foot
    /// at the origin of the world frame
    ///
    /// The derived state is not computed until `init` or `refresh` is called.
    pub fn new(solver: S, bounds: JointBounds<T>) -> Self {
        SupportFootModel {
            solver,
            bounds,
            config: Configuration::default(),
            support_foot: SupportFoot::default(),
            derived: None,
            dirty: true,
        }
    }
    /// Set the support foot and its world pose, then refresh the derived state
    ///
    /// This is the entry point which establishes the anchor of the world frame.
    pub fn init(
        &mut self,
        support_foot: SupportFoot,
        position: &Vector3<T>,
        orientation: &Matrix3<T>,
    ) {
        self.config.set_anchor(*position, *orientation);
        self.support_foot = support_foot;
        debug!(
            "init: support = {}, position = {:?}",
            support_foot,
            position.as_slice()
        );
        self.refresh();
    }
    /// `init` for callers which have plain arrays
    ///
    /// `position` must have 3 values and `orientation` 9 values (column-major).
    pub fn init_from_slices(
        &mut self,
        support_foot: SupportFoot,
        position: &[T],
        orientation: &[T],
    ) -> Result<(), Error> {
        if position.len() != SUPPORT_FOOT_POS_NUM {
            return Err(Error::SizeMismatchError {
                input: position.len(),
                required: SUPPORT_FOOT_POS_NUM,
            });
        }
        if orientation.len() != SUPPORT_FOOT_ORIENTATION_NUM {
            return Err(Error::SizeMismatchError {
                input: orientation.len(),
                required: SUPPORT_FOOT_ORIENTATION_NUM,
            });
        }
        self.init(
            support_foot,
            &Vector3::from_column_slice(position),
            &Matrix3::from_column_slice(orientation),
        );
        Ok(())
    }
    /// Recompute the swing foot, the torso orientation and the center of mass
    ///
    /// This is the only place where the support foot selects the chains.
    pub fn refresh(&mut self) -> &DerivedState<T> {
        let derived = match self.support_foot {
            SupportFoot::Left => {
                let torso = self.solver.left_leg_to_torso(&self.config);
                DerivedState {
                    swing_foot: self.solver.left_leg_to_right_leg(&self.config),
                    torso_orientation: extract_rotation(&torso),
                    com: self.solver.left_leg_to_com(&self.config),
                }
            }
            SupportFoot::Right => {
                let torso = self.solver.right_leg_to_torso(&self.config);
                DerivedState {
                    swing_foot: self.solver.right_leg_to_left_leg(&self.config),
                    torso_orientation: extract_rotation(&torso),
                    com: self.solver.right_leg_to_com(&self.config),
                }
            }
        };
        trace!(
            "refresh: support = {}, com = {:?}",
            self.support_foot,
            derived.com.as_slice()
        );
        self.dirty = false;
        self.derived.insert(derived)
    }
    /// Swap the support foot without moving the robot
    ///
    /// The new support foot is placed exactly at the last computed pose of the
    /// swing foot, then the derived state is refreshed from the new anchor.
    /// The derived state must be fresh, otherwise the anchor would be taken
    /// from a stale swing foot pose.
    pub fn switch_support_foot(&mut self) -> Result<(), Error> {
        let swing_foot = self.derived()?.swing_foot;
        self.support_foot = self.support_foot.opposite();
        self.config.anchor = SupportAnchor::new(
            extract_translation(&swing_foot),
            extract_rotation(&swing_foot),
        );
        debug!(
            "switch support foot to {}, position = {:?}",
            self.support_foot,
            self.config.anchor.position.as_slice()
        );
        self.refresh();
        Ok(())
    }
    /// Cached derived state, fails if it is stale
    pub fn derived(&self) -> Result<&DerivedState<T>, Error> {
        match self.derived {
            Some(ref derived) if !self.dirty => Ok(derived),
            _ => Err(Error::StaleDerivedState),
        }
    }
    /// Center of mass in the world frame
    pub fn com(&self) -> Result<Vector3<T>, Error> {
        Ok(self.derived()?.com)
    }
    pub fn swing_foot_position(&self) -> Result<Vector3<T>, Error> {
        Ok(self.derived()?.swing_foot_position())
    }
    pub fn swing_foot_pose(&self) -> Result<Matrix4<T>, Error> {
        Ok(self.derived()?.swing_foot)
    }
    pub fn torso_orientation(&self) -> Result<Matrix3<T>, Error> {
        Ok(self.derived()?.torso_orientation)
    }
    /// Refresh and return the center of mass
    pub fn updated_com(&mut self) -> Vector3<T> {
        self.refresh().com
    }
    /// Refresh and return the position of the swing foot
    pub fn updated_swing_foot_position(&mut self) -> Vector3<T> {
        self.refresh().swing_foot_position()
    }
    /// Overwrite the cached center of mass, for example with an external estimate
    ///
    /// It is kept until the next refresh.
    pub fn override_com(&mut self, com: Vector3<T>) -> Result<(), Error> {
        if self.dirty {
            return Err(Error::StaleDerivedState);
        }
        if let Some(ref mut derived) = self.derived {
            derived.com = com;
        }
        Ok(())
    }
    /// `true` if the derived state has to be refreshed before reading it
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
    #[inline]
    pub fn support_foot(&self) -> SupportFoot {
        self.support_foot
    }
    #[inline]
    pub fn configuration(&self) -> &Configuration<T> {
        &self.config
    }
    /// Mutable access to the configuration, the derived state becomes stale
    pub fn configuration_mut(&mut self) -> &mut Configuration<T> {
        self.dirty = true;
        &mut self.config
    }
    #[inline]
    pub fn bounds(&self) -> &JointBounds<T> {
        &self.bounds
    }
    #[inline]
    pub fn solver(&self) -> &S {
        &self.solver
    }
    /// Change the limit of a joint, only for the initialization
    pub fn set_bound(&mut self, id: JointId, lower: T, upper: T) {
        self.bounds.set_bound(id, lower, upper);
    }
    /// First joint out of its limits, `None` if all the joints are valid
    pub fn check_bounds(&self) -> Option<JointId> {
        self.config.check_bounds(&self.bounds)
    }
    #[inline]
    pub fn joint_position(&self, id: JointId) -> T {
        self.config.joint_position(id)
    }
    /// Set the position of a joint
    ///
    /// It returns Err if it is out of the limits, and the position is not changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use support_foot::*;
    /// use support_foot::joint::JointId;
    ///
    /// let mut model = SupportFootModel::<f64, _>::nao();
    /// assert!(model.set_joint_position(JointId::LKneePitch, 1.0).is_ok());
    /// assert!(model.set_joint_position(JointId::LKneePitch, 3.0).is_err());
    /// assert_eq!(model.joint_position(JointId::LKneePitch), 1.0);
    /// ```
    pub fn set_joint_position(&mut self, id: JointId, position: T) -> Result<(), Error> {
        let range = self.bounds.range(id);
        if !range.is_valid(position) {
            return Err(Error::OutOfLimitError {
                joint_name: id.name().to_owned(),
                position: na::convert(position),
                max_limit: na::convert(range.max),
                min_limit: na::convert(range.min),
            });
        }
        self.set_joint_position_unchecked(id, position);
        Ok(())
    }
    pub fn set_joint_position_unchecked(&mut self, id: JointId, position: T) {
        self.config.set_joint_position_unchecked(id, position);
        self.dirty = true;
    }
    /// Set the position clamped with the limits of the joint
    pub fn set_joint_position_clamped(&mut self, id: JointId, position: T) {
        let clamped = self.bounds.range(id).clamp(position);
        self.set_joint_position_unchecked(id, clamped);
    }
    /// Set all the body joints in `JointId` order, without checking the limits
    pub fn set_joint_positions_unchecked(&mut self, positions: &[T]) -> Result<(), Error> {
        self.config.set_joint_positions_unchecked(positions)?;
        self.dirty = true;
        Ok(())
    }
    /// Back to the standing posture, the anchor is kept
    pub fn reset_joint_positions(&mut self) {
        self.config.joints = BodyJoints::standing();
        self.dirty = true;
    }
    /// Redefine the world pose of the support foot, see `Configuration::set_base_pose`
    pub fn set_base_pose(&mut self, x: T, y: T, z: T, roll: T, pitch: T, yaw: T) {
        self.config.set_base_pose(x, y, z, roll, pitch, yaw);
        self.dirty = true;
    }
}
