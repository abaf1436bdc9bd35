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

use std::{fmt, str::FromStr};

use crate::{consts::*, Error};

/// Typed view of `PodStatus.phase`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl PodPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PodPhase::Pending => POD_PENDING,
            PodPhase::Running => POD_RUNNING,
            PodPhase::Succeeded => POD_SUCCEEDED,
            PodPhase::Failed => POD_FAILED,
            PodPhase::Unknown => POD_UNKNOWN,
        }
    }

    /// A terminal pod has stopped all of its containers and will not be restarted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, PodPhase::Succeeded | PodPhase::Failed)
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PodPhase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            POD_PENDING => Ok(PodPhase::Pending),
            POD_RUNNING => Ok(PodPhase::Running),
            POD_SUCCEEDED => Ok(PodPhase::Succeeded),
            POD_FAILED => Ok(PodPhase::Failed),
            POD_UNKNOWN => Ok(PodPhase::Unknown),
            other => Err(Error::UnknownPodPhase(other.to_string())),
        }
    }
}

/// Typed view of `PodCondition.status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl ConditionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionStatus::True => CONDITION_TRUE,
            ConditionStatus::False => CONDITION_FALSE,
            ConditionStatus::Unknown => CONDITION_UNKNOWN,
        }
    }
}

impl From<bool> for ConditionStatus {
    fn from(value: bool) -> Self {
        if value {
            ConditionStatus::True
        } else {
            ConditionStatus::False
        }
    }
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConditionStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CONDITION_TRUE => Ok(ConditionStatus::True),
            CONDITION_FALSE => Ok(ConditionStatus::False),
            CONDITION_UNKNOWN => Ok(ConditionStatus::Unknown),
            other => Err(Error::InvalidConditionStatus(other.to_string())),
        }
    }
}
