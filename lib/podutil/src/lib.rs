/*
Copyright 2024 The Kubernetes Authors.

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

//! Helpers for inspecting and updating the status of Kubernetes Pods.
//!
//! Everything here operates on the `k8s-openapi` types in place: nothing talks to an API server,
//! and nothing fails on missing fields. An absent status or condition list simply reads as "not
//! found".

use thiserror::Error;

pub use condition_utils::{
    add_pod_condition, get_condition_status, get_pod_condition, get_pod_condition_from_list,
    get_pod_ready_condition, is_pod_ready_condition_true, update_pod_condition,
};
pub use pod_utils::{
    get_pod_names, get_pod_phase, is_pod_active, is_pod_available, is_pod_ready, is_pod_running,
    is_pod_terminal, is_pod_terminating, is_zero_time,
};
pub use readiness_gate_utils::{add_pod_readiness_gate, has_pod_readiness_gate};
pub use traits::{HasPodConditions, HasReadinessGates};
pub use types::{ConditionStatus, PodPhase};

pub mod consts;

mod condition_utils;
mod pod_utils;
mod readiness_gate_utils;
mod traits;
mod types;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown pod phase: `{0}`")]
    UnknownPodPhase(String),
    #[error("invalid condition status: `{0}`; expected one of True, False, Unknown")]
    InvalidConditionStatus(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
