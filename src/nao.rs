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
//! Forward kinematics of NAO (H25)
//!
//! The torso frame is the origin of the chains: x forward, y left, z up.
//! Lengths are meters, masses are kilograms.
use crate::configuration::*;
use crate::joint::*;
use crate::solver::*;
use na::{Isometry3, Matrix4, Point3, RealField, Translation3, Unit, Vector3};
use nalgebra as na;

const HIP_OFFSET_Y: f64 = 0.05;
const HIP_OFFSET_Z: f64 = 0.085;
const THIGH_LENGTH: f64 = 0.1;
const TIBIA_LENGTH: f64 = 0.1029;
const FOOT_HEIGHT: f64 = 0.04519;
const NECK_OFFSET_Z: f64 = 0.1265;
const SHOULDER_OFFSET_Y: f64 = 0.098;
const SHOULDER_OFFSET_Z: f64 = 0.1;
const UPPER_ARM_LENGTH: f64 = 0.105;
const ELBOW_OFFSET_Y: f64 = 0.015;
const LOWER_ARM_LENGTH: f64 = 0.05595;

const LEFT_LEG: [JointId; 6] = [
    JointId::LHipYawPitch,
    JointId::LHipRoll,
    JointId::LHipPitch,
    JointId::LKneePitch,
    JointId::LAnklePitch,
    JointId::LAnkleRoll,
];
const RIGHT_LEG: [JointId; 6] = [
    JointId::RHipYawPitch,
    JointId::RHipRoll,
    JointId::RHipPitch,
    JointId::RKneePitch,
    JointId::RAnklePitch,
    JointId::RAnkleRoll,
];
const LEFT_ARM: [JointId; 5] = [
    JointId::LShoulderPitch,
    JointId::LShoulderRoll,
    JointId::LElbowYaw,
    JointId::LElbowRoll,
    JointId::LWristYaw,
];
const RIGHT_ARM: [JointId; 5] = [
    JointId::RShoulderPitch,
    JointId::RShoulderRoll,
    JointId::RElbowYaw,
    JointId::RElbowRoll,
    JointId::RWristYaw,
];

/// Mass of a link, and its center in the frame of the joint which moves it
#[derive(Copy, Debug, Clone, PartialEq)]
pub struct LinkMass<T: RealField + Copy> {
    pub mass: T,
    pub center: Vector3<T>,
}

impl<T> LinkMass<T>
where
    T: RealField + Copy,
{
    fn from_f64(mass: f64, center: [f64; 3]) -> Self {
        LinkMass {
            mass: na::convert(mass),
            center: Vector3::new(
                na::convert(center[0]),
                na::convert(center[1]),
                na::convert(center[2]),
            ),
        }
    }
}

/// Fixed origin followed by the motion of one joint
#[derive(Debug, Clone)]
pub struct ChainElement<T: RealField + Copy> {
    pub origin: Isometry3<T>,
    pub joint_type: JointType<T>,
    pub mass: Option<LinkMass<T>>,
}

impl<T> ChainElement<T>
where
    T: RealField + Copy,
{
    pub fn local_transform(&self, joints: &BodyJoints<T>) -> Isometry3<T> {
        let rotation = self.joint_type.rotation(joints);
        self.origin * Isometry3::from_parts(Translation3::identity(), rotation)
    }
}

/// Serial chain which starts at the torso
#[derive(Debug, Clone)]
pub struct SerialChain<T: RealField + Copy> {
    elements: Vec<ChainElement<T>>,
}

impl<T> SerialChain<T>
where
    T: RealField + Copy,
{
    pub fn new(elements: Vec<ChainElement<T>>) -> Self {
        SerialChain { elements }
    }
    /// Transform from the torso to the end of the chain
    pub fn end_transform(&self, joints: &BodyJoints<T>) -> Isometry3<T> {
        self.elements
            .iter()
            .fold(Isometry3::identity(), |acc, element| {
                acc * element.local_transform(joints)
            })
    }
    /// Sum of the link masses, and sum of `mass * center` in the torso frame
    pub fn mass_moment(&self, joints: &BodyJoints<T>) -> (T, Vector3<T>) {
        let mut transform = Isometry3::identity();
        let mut total_mass = T::zero();
        let mut moment = Vector3::zeros();
        for element in &self.elements {
            transform *= element.local_transform(joints);
            if let Some(ref link) = element.mass {
                let center = transform * Point3::from(link.center);
                moment += center.coords * link.mass;
                total_mass += link.mass;
            }
        }
        (total_mass, moment)
    }
    pub fn dof(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| e.joint_type.is_movable())
            .count()
    }
}

fn translation<T: RealField + Copy>(x: f64, y: f64, z: f64) -> Isometry3<T> {
    Isometry3::translation(na::convert(x), na::convert(y), na::convert(z))
}

fn rotational<T: RealField + Copy>(axis: Unit<Vector3<T>>, id: JointId) -> JointType<T> {
    JointType::Rotational { axis, id }
}

fn element<T: RealField + Copy>(
    origin: Isometry3<T>,
    joint_type: JointType<T>,
    mass: Option<LinkMass<T>>,
) -> ChainElement<T> {
    ChainElement {
        origin,
        joint_type,
        mass,
    }
}

/// `side` is 1.0 for the left leg and -1.0 for the right leg
fn leg<T: RealField + Copy>(side: f64, ids: [JointId; 6]) -> SerialChain<T> {
    let [hip_yaw_pitch, hip_roll, hip_pitch, knee_pitch, ankle_pitch, ankle_roll] = ids;
    // hip yaw-pitch axis is tilted 45 degrees in the y-z plane, mirrored
    let hip_axis = Unit::new_normalize(Vector3::new(T::zero(), T::one(), na::convert(-side)));
    let mass = |m: f64, c: [f64; 3]| Some(LinkMass::from_f64(m, [c[0], c[1] * side, c[2]]));
    SerialChain::new(vec![
        element(
            translation(0.0, HIP_OFFSET_Y * side, -HIP_OFFSET_Z),
            rotational(hip_axis, hip_yaw_pitch),
            mass(0.06981, [-0.00781, -0.01114, 0.02661]),
        ),
        element(
            Isometry3::identity(),
            rotational(Vector3::x_axis(), hip_roll),
            mass(0.14053, [-0.01549, 0.00029, -0.00515]),
        ),
        element(
            Isometry3::identity(),
            rotational(Vector3::y_axis(), hip_pitch),
            mass(0.38968, [0.00138, 0.00221, -0.05373]),
        ),
        element(
            translation(0.0, 0.0, -THIGH_LENGTH),
            rotational(Vector3::y_axis(), knee_pitch),
            mass(0.30142, [0.00453, 0.00225, -0.04936]),
        ),
        element(
            translation(0.0, 0.0, -TIBIA_LENGTH),
            rotational(Vector3::y_axis(), ankle_pitch),
            mass(0.13416, [0.00045, 0.00029, 0.00685]),
        ),
        element(
            Isometry3::identity(),
            rotational(Vector3::x_axis(), ankle_roll),
            mass(0.17184, [0.02542, 0.0033, -0.03239]),
        ),
        // sole
        element(translation(0.0, 0.0, -FOOT_HEIGHT), JointType::Fixed, None),
    ])
}

fn arm<T: RealField + Copy>(side: f64, ids: [JointId; 5]) -> SerialChain<T> {
    let [shoulder_pitch, shoulder_roll, elbow_yaw, elbow_roll, wrist_yaw] = ids;
    let mass = |m: f64, c: [f64; 3]| Some(LinkMass::from_f64(m, [c[0], c[1] * side, c[2]]));
    SerialChain::new(vec![
        element(
            translation(0.0, SHOULDER_OFFSET_Y * side, SHOULDER_OFFSET_Z),
            rotational(Vector3::y_axis(), shoulder_pitch),
            mass(0.09304, [-0.00165, -0.02663, 0.00014]),
        ),
        element(
            Isometry3::identity(),
            rotational(Vector3::z_axis(), shoulder_roll),
            mass(0.15777, [0.02455, 0.00563, 0.0033]),
        ),
        element(
            translation(UPPER_ARM_LENGTH, ELBOW_OFFSET_Y * side, 0.0),
            rotational(Vector3::x_axis(), elbow_yaw),
            mass(0.06483, [-0.02744, 0.0, -0.00014]),
        ),
        element(
            Isometry3::identity(),
            rotational(Vector3::z_axis(), elbow_roll),
            mass(0.07761, [0.02556, 0.00281, 0.00076]),
        ),
        element(
            translation(LOWER_ARM_LENGTH, 0.0, 0.0),
            rotational(Vector3::x_axis(), wrist_yaw),
            mass(0.18533, [0.03434, -0.00088, 0.00308]),
        ),
    ])
}

fn head<T: RealField + Copy>() -> SerialChain<T> {
    SerialChain::new(vec![
        element(
            translation(0.0, 0.0, NECK_OFFSET_Z),
            rotational(Vector3::z_axis(), JointId::HeadYaw),
            Some(LinkMass::from_f64(0.07842, [-0.00001, 0.0, -0.02742])),
        ),
        element(
            Isometry3::identity(),
            rotational(Vector3::y_axis(), JointId::HeadPitch),
            Some(LinkMass::from_f64(0.65937, [0.00109, 0.00146, 0.05719])),
        ),
    ])
}

/// `ChainSolver` for NAO built from its link lengths and link masses
///
/// # Examples
///
/// ```
/// use support_foot::*;
///
/// let solver = NaoChainSolver::<f64>::new();
/// let mut config = Configuration::default();
/// config.joints = joint::BodyJoints::zeros();
/// // the feet are side by side when all the joints are zero
/// let right = solver.left_leg_to_right_leg(&config);
/// assert!((right[(1, 3)] + 0.1).abs() < 1e-12);
/// assert!(right[(2, 3)].abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct NaoChainSolver<T: RealField + Copy> {
    left_leg: SerialChain<T>,
    right_leg: SerialChain<T>,
    left_arm: SerialChain<T>,
    right_arm: SerialChain<T>,
    head: SerialChain<T>,
    torso: LinkMass<T>,
}

impl<T> NaoChainSolver<T>
where
    T: RealField + Copy,
{
    pub fn new() -> Self {
        NaoChainSolver {
            left_leg: leg(1.0, LEFT_LEG),
            right_leg: leg(-1.0, RIGHT_LEG),
            left_arm: arm(1.0, LEFT_ARM),
            right_arm: arm(-1.0, RIGHT_ARM),
            head: head(),
            torso: LinkMass::from_f64(1.0496, [-0.00413, 0.0, 0.04342]),
        }
    }
    fn chains(&self) -> [&SerialChain<T>; 5] {
        [
            &self.left_leg,
            &self.right_leg,
            &self.left_arm,
            &self.right_arm,
            &self.head,
        ]
    }
    /// Mass of the whole robot
    pub fn total_mass(&self) -> T {
        let joints = BodyJoints::zeros();
        let mut mass = self.torso.mass;
        for chain in self.chains() {
            mass += chain.mass_moment(&joints).0;
        }
        mass
    }
    /// Center of mass in the torso frame
    pub fn com_in_torso(&self, joints: &BodyJoints<T>) -> Vector3<T> {
        let mut mass = self.torso.mass;
        let mut moment = self.torso.center * self.torso.mass;
        for chain in self.chains() {
            let (m, c) = chain.mass_moment(joints);
            mass += m;
            moment += c;
        }
        moment / mass
    }
    pub fn torso_to_left_sole(&self, joints: &BodyJoints<T>) -> Isometry3<T> {
        self.left_leg.end_transform(joints)
    }
    pub fn torso_to_right_sole(&self, joints: &BodyJoints<T>) -> Isometry3<T> {
        self.right_leg.end_transform(joints)
    }
    /// Compose the world pose of the anchor with a pose relative to it
    fn to_world(config: &Configuration<T>, relative: &Isometry3<T>) -> Matrix4<T> {
        config.anchor.to_homogeneous() * relative.to_homogeneous()
    }
    fn com_from_sole(&self, config: &Configuration<T>, sole: &Isometry3<T>) -> Vector3<T> {
        let com = Point3::from(self.com_in_torso(&config.joints));
        let com_in_sole = sole.inverse() * com;
        config.anchor.transform_point(&com_in_sole).coords
    }
}

impl<T> Default for NaoChainSolver<T>
where
    T: RealField + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ChainSolver<T> for NaoChainSolver<T>
where
    T: RealField + Copy,
{
    fn left_leg_to_right_leg(&self, config: &Configuration<T>) -> Matrix4<T> {
        let left = self.torso_to_left_sole(&config.joints);
        let right = self.torso_to_right_sole(&config.joints);
        Self::to_world(config, &(left.inverse() * right))
    }
    fn right_leg_to_left_leg(&self, config: &Configuration<T>) -> Matrix4<T> {
        let left = self.torso_to_left_sole(&config.joints);
        let right = self.torso_to_right_sole(&config.joints);
        Self::to_world(config, &(right.inverse() * left))
    }
    fn left_leg_to_torso(&self, config: &Configuration<T>) -> Matrix4<T> {
        let sole = self.torso_to_left_sole(&config.joints);
        Self::to_world(config, &sole.inverse())
    }
    fn right_leg_to_torso(&self, config: &Configuration<T>) -> Matrix4<T> {
        let sole = self.torso_to_right_sole(&config.joints);
        Self::to_world(config, &sole.inverse())
    }
    fn left_leg_to_com(&self, config: &Configuration<T>) -> Vector3<T> {
        self.com_from_sole(config, &self.torso_to_left_sole(&config.joints))
    }
    fn right_leg_to_com(&self, config: &Configuration<T>) -> Vector3<T> {
        self.com_from_sole(config, &self.torso_to_right_sole(&config.joints))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::*;

    const LEG_LENGTH: f64 = HIP_OFFSET_Z + THIGH_LENGTH + TIBIA_LENGTH + FOOT_HEIGHT;

    #[test]
    fn test_dof() {
        let solver = NaoChainSolver::<f64>::new();
        let dof: usize = solver.chains().iter().map(|c| c.dof()).sum();
        assert_eq!(dof, JOINTS_NUM);
    }

    #[test]
    fn test_total_mass() {
        let solver = NaoChainSolver::<f64>::new();
        assert!((solver.total_mass() - 5.35943).abs() < 1e-9);
    }

    #[test]
    fn test_zero_posture() {
        let solver = NaoChainSolver::<f64>::new();
        let joints = BodyJoints::zeros();
        let left = solver.torso_to_left_sole(&joints);
        let expected = Vector3::new(0.0, HIP_OFFSET_Y, -LEG_LENGTH);
        assert!((left.translation.vector - expected).norm() < 1e-12);

        let mut config = Configuration::default();
        config.joints = joints;
        let torso = solver.left_leg_to_torso(&config);
        let expected = Vector3::new(0.0, -HIP_OFFSET_Y, LEG_LENGTH);
        assert!((extract_translation(&torso) - expected).norm() < 1e-12);
        let rotation = extract_rotation(&torso);
        assert!((rotation - na::Matrix3::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_standing_com_is_between_feet() {
        let solver = NaoChainSolver::<f64>::new();
        let joints = BodyJoints::standing();
        let com = solver.com_in_torso(&joints);
        assert!(com.y.abs() < 1e-3);
        let mut config = Configuration::default();
        config.joints = joints;
        let com = solver.left_leg_to_com(&config);
        // half of the hip width to the right of the left sole
        assert!((com.y + HIP_OFFSET_Y).abs() < 1e-3);
        assert!(com.z > 0.2 && com.z < LEG_LENGTH + 0.05);
    }

    #[test]
    fn test_feet_are_inverse_of_each_other() {
        let solver = NaoChainSolver::<f64>::new();
        let mut config = Configuration::default();
        config.joints[JointId::LHipRoll] = 0.2;
        config.joints[JointId::RKneePitch] = 1.1;
        config.joints[JointId::RHipYawPitch] = -0.3;
        let l2r = solver.left_leg_to_right_leg(&config);
        let r2l = solver.right_leg_to_left_leg(&config);
        assert!((l2r * r2l - Matrix4::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_anchor_is_applied() {
        let solver = NaoChainSolver::<f64>::new();
        let mut config = Configuration::default();
        let local = solver.left_leg_to_torso(&config);
        let local_com = solver.left_leg_to_com(&config);
        config.set_base_pose(1.0, 2.0, 0.0, 0.0, 0.0, 0.5);
        let world = solver.left_leg_to_torso(&config);
        let expected = config.anchor.to_homogeneous() * local;
        assert!((expected - world).norm() < 1e-12);
        let world_com = solver.left_leg_to_com(&config);
        let expected = config.anchor.transform_point(&Point3::from(local_com));
        assert!((expected.coords - world_com).norm() < 1e-12);
    }
}
