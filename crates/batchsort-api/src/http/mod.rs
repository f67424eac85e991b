//! HTTP endpoints.
//!
//! | Endpoint | Method | Strategy |
//! |----------|--------|----------|
//! | `/process-single` | POST | Sequential |
//! | `/process-concurrent` | POST | Concurrent |
//!
//! Both accept `{"to_sort": [[int, ...], ...]}` and answer
//! `{"sorted_arrays": [[int, ...], ...], "time_ns": <u64>}`.

pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult, INTERNAL_ERROR_MESSAGE, INVALID_PAYLOAD_MESSAGE};
pub use extract::JsonBody;
pub use routes::{create_router, create_router_with_metrics, SortRequestBody, SortResponseBody};
pub use state::AppState;
