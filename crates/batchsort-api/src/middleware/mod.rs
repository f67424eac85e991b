//! Tower middleware wrapped around the sorting routes.

mod metrics;
mod request_id;
mod trace;

pub use metrics::{MetricsLayer, MetricsService, RequestMetrics};
pub use request_id::{RequestIdLayer, RequestIdService, REQUEST_ID_HEADER};
pub use trace::{TraceLayer, TracingService};

#[cfg(test)]
mod tests;
