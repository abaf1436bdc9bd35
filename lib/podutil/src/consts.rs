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

// Pod phases as reported in PodStatus.phase.
pub const POD_PENDING: &str = "Pending";
pub const POD_RUNNING: &str = "Running";
pub const POD_SUCCEEDED: &str = "Succeeded";
pub const POD_FAILED: &str = "Failed";
pub const POD_UNKNOWN: &str = "Unknown";

// Built-in pod condition types.
pub const POD_SCHEDULED: &str = "PodScheduled";
pub const POD_INITIALIZED: &str = "Initialized";
pub const CONTAINERS_READY: &str = "ContainersReady";
pub const POD_READY: &str = "Ready";
pub const DISRUPTION_TARGET: &str = "DisruptionTarget";

// Values of a condition's tri-state status.
pub const CONDITION_TRUE: &str = "True";
pub const CONDITION_FALSE: &str = "False";
pub const CONDITION_UNKNOWN: &str = "Unknown";

// Unix seconds of 0001-01-01T00:00:00Z, the zero value of an API timestamp. Clients that
// serialize an unset timestamp send this instead of omitting the field.
pub(crate) const ZERO_TIME_UNIX_SECONDS: i64 = -62_135_596_800;
