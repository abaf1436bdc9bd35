#![allow(dead_code)]

use chrono::{DateTime, Utc};
use k8s_openapi::api::core::v1::{Pod, PodCondition, PodStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{self as metav1, ObjectMeta};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn time(rfc3339: &str) -> metav1::Time {
    let ts = DateTime::parse_from_rfc3339(rfc3339).expect("invalid timestamp in test fixture");
    metav1::Time(ts.with_timezone(&Utc))
}

pub fn pod(name: &str, phase: Option<&str>) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: None,
        status: Some(PodStatus {
            phase: phase.map(str::to_string),
            ..Default::default()
        }),
    }
}

pub fn condition(type_: &str, status: &str) -> PodCondition {
    PodCondition {
        type_: type_.to_string(),
        status: status.to_string(),
        ..Default::default()
    }
}

pub fn status_with(conditions: Vec<PodCondition>) -> PodStatus {
    PodStatus {
        conditions: Some(conditions),
        ..Default::default()
    }
}
