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

use crate::{
    consts::*, pod_utils::is_zero_time, traits::HasPodConditions, types::ConditionStatus, Result,
};

use chrono::Utc;
use k8s_openapi::api::core::v1::{PodCondition, PodStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use tracing::*;

/// Returns true if the status carries a Ready condition whose status is True.
pub fn is_pod_ready_condition_true(status: &PodStatus) -> bool {
    get_pod_ready_condition(status).is_some_and(|condition| condition.status == CONDITION_TRUE)
}

/// Returns the Ready condition from the provided status, if present.
pub fn get_pod_ready_condition(status: &PodStatus) -> Option<&PodCondition> {
    get_pod_condition(Some(status), POD_READY).map(|(_, condition)| condition)
}

/// Looks up the first condition of the given type in the provided status.
///
/// Returns the position of the condition in the list together with the condition itself, or
/// `None` when there is no status, no condition list, or no condition of that type.
pub fn get_pod_condition<'a>(
    status: Option<&'a PodStatus>,
    condition_type: &str,
) -> Option<(usize, &'a PodCondition)> {
    get_pod_condition_from_list(status?.conditions.as_deref(), condition_type)
}

/// Same as [`get_pod_condition`], operating directly on a condition list.
pub fn get_pod_condition_from_list<'a>(
    conditions: Option<&'a [PodCondition]>,
    condition_type: &str,
) -> Option<(usize, &'a PodCondition)> {
    conditions?
        .iter()
        .enumerate()
        .find(|(_, condition)| condition.type_ == condition_type)
}

/// Updates the existing condition of the same type or appends the provided one.
///
/// The condition's last transition time is stamped with the current time, unless a condition of
/// the same type already exists with the same status, in which case its transition time is kept.
/// Returns true if the condition was added or any of its fields changed.
pub fn update_pod_condition<T: HasPodConditions>(obj: &mut T, mut condition: PodCondition) -> bool {
    condition.last_transition_time = Some(metav1::Time(Utc::now()));

    let conditions = obj.get_conditions_mut().get_or_insert_with(Vec::new);
    let index = match conditions
        .iter()
        .position(|existing| existing.type_ == condition.type_)
    {
        Some(index) => index,
        None => {
            debug!(
                condition_type = %condition.type_,
                status = %condition.status,
                "adding pod condition"
            );
            conditions.push(condition);
            return true;
        }
    };

    let old = &mut conditions[index];
    if condition.status == old.status {
        condition
            .last_transition_time
            .clone_from(&old.last_transition_time);
    }

    let unchanged = condition.status == old.status
        && same_text(&condition.reason, &old.reason)
        && same_text(&condition.message, &old.message)
        && same_time(&condition.last_probe_time, &old.last_probe_time)
        && same_time(&condition.last_transition_time, &old.last_transition_time);

    if unchanged {
        trace!(condition_type = %condition.type_, "pod condition unchanged");
    } else {
        debug!(
            condition_type = %condition.type_,
            old_status = %old.status,
            status = %condition.status,
            "updating pod condition"
        );
    }
    *old = condition;

    !unchanged
}

// An unset string and an empty one are the same value on the wire.
fn same_text(a: &Option<String>, b: &Option<String>) -> bool {
    a.as_deref().unwrap_or_default() == b.as_deref().unwrap_or_default()
}

// An unset timestamp and the zero instant are the same value on the wire.
fn same_time(a: &Option<metav1::Time>, b: &Option<metav1::Time>) -> bool {
    let a = a.as_ref().filter(|ts| !is_zero_time(ts));
    let b = b.as_ref().filter(|ts| !is_zero_time(ts));
    a == b
}

/// Appends the provided condition unless one of the same type is already present.
///
/// Returns true if the condition was added, in which case its last transition time is set to the
/// current time.
pub fn add_pod_condition<T: HasPodConditions>(obj: &mut T, mut condition: PodCondition) -> bool {
    if get_pod_condition_from_list(obj.get_conditions(), &condition.type_).is_some() {
        trace!(condition_type = %condition.type_, "pod condition already present");
        return false;
    }

    condition.last_transition_time = Some(metav1::Time(Utc::now()));
    debug!(
        condition_type = %condition.type_,
        status = %condition.status,
        "adding pod condition"
    );
    obj.get_conditions_mut()
        .get_or_insert_with(Vec::new)
        .push(condition);
    true
}

/// Parses the tri-state status of the provided condition.
pub fn get_condition_status(condition: &PodCondition) -> Result<ConditionStatus> {
    condition.status.parse()
}
