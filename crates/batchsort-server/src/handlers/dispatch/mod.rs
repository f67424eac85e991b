//! Timed batch dispatch.
//!
//! The [`Dispatcher`] is the single entry point for sorting a batch. It
//! selects the executor implied by the [`Strategy`], runs it to completion
//! and measures the sort phase only:
//!
//! ```text
//! start = Instant::now()
//!     └── SequentialExecutor | ConcurrentExecutor   (exactly one)
//! elapsed = start.elapsed()
//! ```
//!
//! Decoding and encoding happen outside this module and are never timed.
//!
//! [`Strategy`]: batchsort_domain::Strategy

mod dispatcher;

pub use dispatcher::Dispatcher;
