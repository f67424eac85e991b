//! batchsort-api: HTTP boundary for the batch-sorting service
//!
//! This crate provides the service boundary including:
//! - HTTP endpoints via Axum (`/process-single`, `/process-concurrent`)
//! - Middleware (request IDs, tracing, request metrics)
//! - Observability setup (structured logging, Prometheus exporter)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │               batchsort-api                  │
//! ├─────────────────────────────────────────────┤
//! │  http/          - Routes, extractor, errors │
//! │  middleware/    - Request id, trace, metrics│
//! │  observability/ - Logging & metrics setup   │
//! └─────────────────────────────────────────────┘
//! ```

pub mod http;
pub mod middleware;
pub mod observability;
