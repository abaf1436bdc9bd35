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

use crate::{condition_utils::*, consts::*, types::PodPhase, Result};

use chrono::Duration;
use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

/// Returns the names of the provided pods, in order. A pod without a name yields an empty string.
pub fn get_pod_names<'a, I>(pods: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Pod>,
{
    pods.into_iter()
        .map(|pod| pod.metadata.name.clone().unwrap_or_default())
        .collect()
}

fn phase(pod: &Pod) -> Option<&str> {
    pod.status.as_ref()?.phase.as_deref()
}

/// Returns the typed phase of the pod, or None if the pod has not reported one yet.
pub fn get_pod_phase(pod: &Pod) -> Result<Option<PodPhase>> {
    phase(pod).map(|phase| phase.parse()).transpose()
}

/// Returns true if the timestamp is the zero instant, which the API uses for "unset".
pub fn is_zero_time(time: &metav1::Time) -> bool {
    time.0.timestamp() == ZERO_TIME_UNIX_SECONDS && time.0.timestamp_subsec_nanos() == 0
}

/// Returns true if the pod has been marked for deletion.
pub fn is_pod_terminating(pod: &Pod) -> bool {
    pod.metadata
        .deletion_timestamp
        .as_ref()
        .is_some_and(|ts| !is_zero_time(ts))
}

/// Returns true if the pod is in the Running phase and is not being deleted.
pub fn is_pod_running(pod: &Pod) -> bool {
    !is_pod_terminating(pod) && phase(pod) == Some(POD_RUNNING)
}

/// Returns true if the pod has neither terminated nor been marked for deletion.
pub fn is_pod_active(pod: &Pod) -> bool {
    !is_pod_terminal(pod) && !is_pod_terminating(pod)
}

/// Returns true if the pod is in the Succeeded or Failed phase.
pub fn is_pod_terminal(pod: &Pod) -> bool {
    matches!(phase(pod), Some(POD_SUCCEEDED | POD_FAILED))
}

/// Returns true if the pod's Ready condition is True.
pub fn is_pod_ready(pod: &Pod) -> bool {
    pod.status
        .as_ref()
        .is_some_and(is_pod_ready_condition_true)
}

/// Returns true if the pod is ready and has been ready for at least `min_ready_seconds` at `now`.
///
/// With `min_ready_seconds == 0` this is the same as [`is_pod_ready`]. Otherwise the Ready
/// condition must carry a non-zero last transition time.
pub fn is_pod_available(pod: &Pod, min_ready_seconds: i32, now: &metav1::Time) -> bool {
    if !is_pod_ready(pod) {
        return false;
    }
    if min_ready_seconds == 0 {
        return true;
    }

    let Some(ready) = pod.status.as_ref().and_then(get_pod_ready_condition) else {
        return false;
    };
    match &ready.last_transition_time {
        Some(ts) if !is_zero_time(ts) => ts
            .0
            .checked_add_signed(Duration::seconds(i64::from(min_ready_seconds)))
            .is_some_and(|ready_since| ready_since < now.0),
        _ => false,
    }
}
