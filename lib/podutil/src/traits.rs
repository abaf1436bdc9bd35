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

use k8s_openapi::api::core::v1::{Pod, PodCondition, PodReadinessGate, PodSpec, PodStatus};

// Lets the condition helpers work on either a whole Pod or just its status.
pub trait HasPodConditions {
    fn get_conditions(&self) -> Option<&[PodCondition]>;
    fn get_conditions_mut(&mut self) -> &mut Option<Vec<PodCondition>>;
}

impl HasPodConditions for PodStatus {
    fn get_conditions(&self) -> Option<&[PodCondition]> {
        self.conditions.as_deref()
    }

    fn get_conditions_mut(&mut self) -> &mut Option<Vec<PodCondition>> {
        &mut self.conditions
    }
}

impl HasPodConditions for Pod {
    fn get_conditions(&self) -> Option<&[PodCondition]> {
        self.status.as_ref()?.conditions.as_deref()
    }

    // A pod without a status gets an empty one.
    fn get_conditions_mut(&mut self) -> &mut Option<Vec<PodCondition>> {
        &mut self.status.get_or_insert_with(PodStatus::default).conditions
    }
}

// Lets the readiness gate helpers work on either a whole Pod or just its spec.
pub trait HasReadinessGates {
    fn get_readiness_gates(&self) -> Option<&[PodReadinessGate]>;
    fn get_readiness_gates_mut(&mut self) -> &mut Option<Vec<PodReadinessGate>>;
}

impl HasReadinessGates for PodSpec {
    fn get_readiness_gates(&self) -> Option<&[PodReadinessGate]> {
        self.readiness_gates.as_deref()
    }

    fn get_readiness_gates_mut(&mut self) -> &mut Option<Vec<PodReadinessGate>> {
        &mut self.readiness_gates
    }
}

impl HasReadinessGates for Pod {
    fn get_readiness_gates(&self) -> Option<&[PodReadinessGate]> {
        self.spec.as_ref()?.readiness_gates.as_deref()
    }

    // A pod without a spec gets an empty one.
    fn get_readiness_gates_mut(&mut self) -> &mut Option<Vec<PodReadinessGate>> {
        &mut self.spec.get_or_insert_with(PodSpec::default).readiness_gates
    }
}
