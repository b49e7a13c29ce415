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
//! # Support foot relative kinematic state of a biped using [nalgebra](http://nalgebra.org).
//!
//! `support_foot` has below functionalities
//!
//! 1. Homogeneous transform helpers (roll-pitch-yaw, pose offsets)
//! 1. Joint configuration with joint limits
//! 1. Kinematic model anchored at the support foot, with support foot switching
//! 1. Forward kinematics of NAO and URDF loader for the joint limits
//!
//! See `SupportFootModel` as the top level interface.
//!
//! The model is not thread safe by itself: the joint writes and `refresh` are
//! not atomic, so the caller has to serialize the access.
mod configuration;
mod errors;
pub mod joint;
mod model;
mod nao;
mod solver;
pub mod transform;
pub mod urdf;

pub use self::configuration::*;
pub use self::errors::*;
pub use self::joint::{BodyJoints, JointBounds, JointId};
pub use self::model::*;
pub use self::nao::*;
pub use self::solver::*;

// re-export from nalgebra
pub use nalgebra::{Matrix3, Matrix4, RealField, Vector3};
pub use simba::scalar::{SubsetOf, SupersetOf};
