//! batchsort server binary.
//!
//! ```bash
//! # Defaults, listening on 0.0.0.0:8000
//! batchsort
//!
//! # YAML file plus environment overrides
//! BATCHSORT_SERVER__PORT=9090 batchsort --config config/batchsort.yaml
//!
//! # Verbose logging with span timings
//! batchsort --log-level debug --log-spans
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::{info, Level};

use batchsort_api::http::{create_router, AppState};
use batchsort_api::observability::{init_logging, init_metrics, LoggingConfig};
use batchsort_server::ServerConfig;

/// Batch sorting HTTP service
#[derive(Parser, Debug)]
#[command(name = "batchsort")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file (YAML)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level, overriding `logging.level` (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<Level>,

    /// Also log span close events with their timings
    #[arg(long)]
    log_spans: bool,
}

impl Args {
    /// Logging setup from the loaded config, with CLI flags taking precedence.
    fn logging_config(&self, config: &ServerConfig) -> LoggingConfig {
        let base = if config.logging.json {
            LoggingConfig::json()
        } else {
            LoggingConfig::text()
        };
        let level = self
            .log_level
            .unwrap_or_else(|| parse_log_level(&config.logging.level));
        let logging = base.with_level(level);

        if self.log_spans {
            logging.with_spans()
        } else {
            logging
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::from_env()?,
    };

    init_logging(args.logging_config(&config));

    info!(version = env!("CARGO_PKG_VERSION"), "Starting batchsort");

    if config.metrics.enabled {
        let metrics_addr: SocketAddr = config
            .metrics_addr()
            .parse()
            .with_context(|| format!("invalid metrics address {}", config.metrics_addr()))?;
        init_metrics(metrics_addr)?;
        info!(%metrics_addr, "Prometheus exporter listening");
    }

    let listener = tokio::net::TcpListener::bind(config.http_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.http_addr()))?;
    let addr = listener.local_addr()?;

    let router = create_router(AppState::new());

    info!(%addr, "Server is listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, draining in-flight requests"),
        _ = terminate => info!("Received SIGTERM, draining in-flight requests"),
    }
}

/// Config validation already rejects unknown levels; INFO is the fallback.
fn parse_log_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}
