//! Shared helpers for the batchsort HTTP test suites.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use batchsort_api::http::{create_router, create_router_with_metrics, AppState};
use batchsort_api::middleware::RequestMetrics;
use batchsort_domain::{Sequence, Sorter};
use batchsort_server::Dispatcher;
use tower::ServiceExt;

pub const SINGLE: &str = "/process-single";
pub const CONCURRENT: &str = "/process-concurrent";
pub const ENDPOINTS: [&str; 2] = [SINGLE, CONCURRENT];

/// Number of in-flight requests used by the concurrency tests.
pub const CONCURRENT_CLIENT_COUNT: usize = 50;

pub fn create_test_app() -> axum::Router {
    create_router(AppState::new())
}

pub fn create_test_app_with_metrics(metrics: &Arc<RequestMetrics>) -> axum::Router {
    create_router_with_metrics(AppState::new(), Arc::clone(metrics))
}

/// Router whose dispatcher sorts with `sorter` instead of the standard sort.
pub fn create_test_app_with_sorter<S: Sorter>(sorter: S) -> axum::Router {
    let dispatcher = Dispatcher::with_sorter(Arc::new(sorter));
    create_router(AppState::with_dispatcher(Arc::new(dispatcher)))
}

/// POSTs `body` as JSON; returns the status and the decoded JSON (or the raw
/// text wrapped as `{"raw_body": ...}` when the response is not JSON).
pub async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = post_raw(app, uri, serde_json::to_vec(&body).unwrap()).await;
    let json = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
        serde_json::json!({ "raw_body": String::from_utf8_lossy(&bytes).to_string() })
    });
    (status, json)
}

pub async fn post_raw(
    app: axum::Router,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

pub fn sorted_arrays(response: &serde_json::Value) -> Vec<Sequence> {
    serde_json::from_value(response["sorted_arrays"].clone()).unwrap()
}

pub fn sorted_copy(batch: &[Sequence]) -> Vec<Sequence> {
    batch
        .iter()
        .map(|sequence| {
            let mut sequence = sequence.clone();
            sequence.sort();
            sequence
        })
        .collect()
}
