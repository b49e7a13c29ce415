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
use thiserror::Error;

/// The reason of the failure of an operation on the kinematic state
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "joint: {joint_name} is out of limit: {position} (min: {min_limit}, max: {max_limit})"
    )]
    OutOfLimitError {
        joint_name: String,
        position: f64,
        max_limit: f64,
        min_limit: f64,
    },
    #[error("size mismatch: input = {input}, required = {required}")]
    SizeMismatchError { input: usize, required: usize },
    #[error("{index} is not a body joint index (must be less than {joints_num})")]
    InvalidJointIndex { index: usize, joints_num: usize },
    #[error("unknown joint name: {0}")]
    UnknownJointName(String),
    #[error("derived state is stale, refresh it before reading")]
    StaleDerivedState,
    #[error("failed to load urdf: {0}")]
    UrdfError(#[from] urdf_rs::UrdfError),
}

#[test]
fn test_error_message() {
    let err = Error::OutOfLimitError {
        joint_name: "LKneePitch".to_owned(),
        position: 2.5,
        max_limit: 2.112528,
        min_limit: -0.092346,
    };
    assert_eq!(
        err.to_string(),
        "joint: LKneePitch is out of limit: 2.5 (min: -0.092346, max: 2.112528)"
    );
    let err = Error::SizeMismatchError {
        input: 3,
        required: 9,
    };
    assert_eq!(err.to_string(), "size mismatch: input = 3, required = 9");
}
