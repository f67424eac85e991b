//! Prometheus metrics.
//!
//! Recording goes through the `metrics` facade and is free when no recorder
//! is installed. [`init_metrics`] installs `metrics-exporter-prometheus`
//! with its own scrape listener, separate from the sorting routes.
//!
//! Dispatch metrics, all labelled by `strategy`:
//!
//! - `batchsort_dispatch_total` - batches sorted
//! - `batchsort_dispatch_failures_total` - batches that failed
//! - `batchsort_dispatch_duration_seconds` - sort-phase duration
//! - `batchsort_dispatch_sequences` - sequences per batch

use std::net::SocketAddr;
use std::time::Duration;

use batchsort_domain::Strategy;
use metrics_exporter_prometheus::PrometheusBuilder;

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("failed to install Prometheus exporter on {addr}: {reason}")]
    Install { addr: SocketAddr, reason: String },
}

/// Installs the global Prometheus recorder and starts its scrape listener
/// on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|err| MetricsError::Install {
            addr,
            reason: err.to_string(),
        })?;

    describe_metrics();
    Ok(())
}

fn describe_metrics() {
    metrics::describe_counter!(
        "batchsort_http_requests_total",
        "Total number of HTTP requests"
    );
    metrics::describe_histogram!(
        "batchsort_http_request_duration_seconds",
        metrics::Unit::Seconds,
        "HTTP request duration in seconds"
    );
    metrics::describe_counter!("batchsort_dispatch_total", "Batches sorted, by strategy");
    metrics::describe_counter!(
        "batchsort_dispatch_failures_total",
        "Batches whose sort failed, by strategy"
    );
    metrics::describe_histogram!(
        "batchsort_dispatch_duration_seconds",
        metrics::Unit::Seconds,
        "Sort-phase duration in seconds, by strategy"
    );
    metrics::describe_histogram!(
        "batchsort_dispatch_sequences",
        metrics::Unit::Count,
        "Sequences per batch, by strategy"
    );
}

/// Records a successfully sorted batch.
pub fn record_dispatch(strategy: Strategy, sequences: usize, elapsed: Duration) {
    let labels = [("strategy", strategy.as_str())];
    metrics::counter!("batchsort_dispatch_total", &labels).increment(1);
    metrics::histogram!("batchsort_dispatch_duration_seconds", &labels)
        .record(elapsed.as_secs_f64());
    metrics::histogram!("batchsort_dispatch_sequences", &labels).record(sequences as f64);
}

pub fn record_dispatch_failure(strategy: Strategy) {
    metrics::counter!("batchsort_dispatch_failures_total", "strategy" => strategy.as_str())
        .increment(1);
}
