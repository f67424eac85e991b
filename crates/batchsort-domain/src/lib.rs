//! batchsort-domain: Batch model and sort executors
//!
//! This crate contains the core of the batch-sorting service:
//! - Batch, sequence and strategy types
//! - The `Sorter` seam used by every executor
//! - Sequential and concurrent executors
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              batchsort-domain                │
//! ├─────────────────────────────────────────────┤
//! │  model/     - Batch, Strategy, Dispatched   │
//! │  sort.rs    - Sorter trait + std sort       │
//! │  executor/  - Sequential & concurrent       │
//! │  error.rs   - Dispatch errors               │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod executor;
pub mod model;
pub mod sort;

// Re-export commonly used types at the crate root
pub use error::{DispatchError, DispatchResult};
pub use executor::{ConcurrentExecutor, Executor, SequentialExecutor};
pub use model::{Batch, Dispatched, Sequence, Strategy};
pub use sort::{Sorter, StandardSorter};
