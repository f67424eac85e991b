//! Logging and metrics setup for the batchsort service.

mod logging;
mod metrics;

pub use logging::{init_logging, LoggingConfig};
pub use metrics::{init_metrics, record_dispatch, record_dispatch_failure, MetricsError};
