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

use crate::traits::HasReadinessGates;

use k8s_openapi::api::core::v1::PodReadinessGate;
use tracing::*;

/// Returns true if a readiness gate for the condition type is declared.
pub fn has_pod_readiness_gate<T: HasReadinessGates>(obj: &T, condition_type: &str) -> bool {
    obj.get_readiness_gates()
        .unwrap_or_default()
        .iter()
        .any(|gate| gate.condition_type == condition_type)
}

/// Declares a readiness gate for the condition type unless one already exists.
/// Returns true if the readiness gate was added.
pub fn add_pod_readiness_gate<T: HasReadinessGates>(obj: &mut T, condition_type: &str) -> bool {
    if has_pod_readiness_gate(obj, condition_type) {
        trace!(condition_type, "readiness gate already present");
        return false;
    }

    debug!(condition_type, "adding readiness gate");
    obj.get_readiness_gates_mut()
        .get_or_insert_with(Vec::new)
        .push(PodReadinessGate {
            condition_type: condition_type.to_string(),
        });
    true
}
