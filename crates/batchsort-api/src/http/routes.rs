//! HTTP route definitions and handlers.

use std::fmt;
use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::post,
    Json, Router,
};
use batchsort_domain::{Batch, Sequence, Sorter, Strategy};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::error::{ApiError, ApiResult};
use super::extract::JsonBody;
use super::state::AppState;
use crate::middleware::{MetricsLayer, RequestIdLayer, RequestMetrics, TraceLayer};
use crate::observability::{record_dispatch, record_dispatch_failure};

fn api_routes<S: Sorter>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route("/process-single", post(process_single::<S>))
        .route("/process-concurrent", post(process_concurrent::<S>))
}

/// Creates the HTTP router with a fresh request-metrics collector.
pub fn create_router<S: Sorter>(state: AppState<S>) -> Router {
    create_router_with_metrics(state, Arc::new(RequestMetrics::new()))
}

/// Creates the HTTP router, recording request metrics into `metrics`.
///
/// Request bodies are not size-limited: arbitrarily large batches are
/// accepted.
pub fn create_router_with_metrics<S: Sorter>(
    state: AppState<S>,
    metrics: Arc<RequestMetrics>,
) -> Router {
    api_routes::<S>()
        .with_state(Arc::new(state))
        .layer(DefaultBodyLimit::disable())
        // Layers run bottom-to-top: request id is assigned before anything else
        .layer(TraceLayer::new())
        .layer(MetricsLayer::new(metrics))
        .layer(RequestIdLayer::new())
}

// ============================================================
// Sorting
// ============================================================

/// Request body for both sorting endpoints.
///
/// Decoding is lenient in the same ways for every input:
///
/// - the `to_sort` key is matched ignoring ASCII case, last occurrence wins
/// - a missing or `null` `to_sort`, or a `null` body, is an empty batch
/// - a `null` sequence inside the batch is an empty sequence
/// - unknown fields are ignored
#[derive(Debug, Default)]
pub struct SortRequestBody {
    pub to_sort: Batch,
}

const TO_SORT_FIELD: &str = "to_sort";

impl<'de> Deserialize<'de> for SortRequestBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SortRequestVisitor)
    }
}

struct SortRequestVisitor;

impl<'de> Visitor<'de> for SortRequestVisitor {
    type Value = SortRequestBody;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object with a `to_sort` array of integer arrays")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SortRequestBody::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut body = SortRequestBody::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case(TO_SORT_FIELD) {
                body.to_sort = map
                    .next_value::<Option<Vec<Option<Sequence>>>>()?
                    .unwrap_or_default()
                    .into_iter()
                    .map(Option::unwrap_or_default)
                    .collect::<Vec<_>>()
                    .into();
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(body)
    }
}

/// Response body for both sorting endpoints.
#[derive(Debug, Serialize)]
pub struct SortResponseBody {
    pub sorted_arrays: Batch,
    /// Sort-phase duration in nanoseconds; decoding and encoding excluded.
    pub time_ns: u64,
}

async fn process_single<S: Sorter>(
    State(state): State<Arc<AppState<S>>>,
    JsonBody(body): JsonBody<SortRequestBody>,
) -> ApiResult<Json<SortResponseBody>> {
    handle_request(&state, body, Strategy::Sequential).await
}

async fn process_concurrent<S: Sorter>(
    State(state): State<Arc<AppState<S>>>,
    JsonBody(body): JsonBody<SortRequestBody>,
) -> ApiResult<Json<SortResponseBody>> {
    handle_request(&state, body, Strategy::Concurrent).await
}

async fn handle_request<S: Sorter>(
    state: &AppState<S>,
    body: SortRequestBody,
    strategy: Strategy,
) -> ApiResult<Json<SortResponseBody>> {
    let sequences = body.to_sort.len();

    let dispatched = state
        .dispatcher
        .run(body.to_sort, strategy)
        .await
        .map_err(|err| {
            record_dispatch_failure(strategy);
            ApiError::from(err)
        })?;

    record_dispatch(strategy, sequences, dispatched.elapsed);

    Ok(Json(SortResponseBody {
        time_ns: dispatched.time_ns(),
        sorted_arrays: dispatched.batch,
    }))
}
