//! batchsort-server: Dispatch harness and configuration
//!
//! This crate sits between the HTTP boundary and the domain executors:
//! - Dispatcher: strategy selection and sort-phase timing
//! - Configuration management
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              batchsort-server                │
//! ├─────────────────────────────────────────────┤
//! │  config.rs   - Configuration management     │
//! │  handlers/   - Request handlers             │
//! │    dispatch/      - Timed batch dispatch    │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod handlers;

// Re-exports for convenience
pub use config::{ConfigLoadError, ServerConfig};
pub use handlers::dispatch::Dispatcher;
