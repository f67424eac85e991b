//! Domain error types for dispatch operations.

use thiserror::Error;

/// Errors surfaced by an executor.
///
/// Sorting integers cannot fail, so every variant describes a fault in the
/// unit of execution itself rather than in the data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// The sorter panicked on the sequence at `index`.
    #[error("sort task for sequence {index} panicked: {message}")]
    TaskPanicked { index: usize, message: String },

    /// A sort task was cancelled before it could report back.
    #[error("sort task aborted: {message}")]
    TaskAborted {
        index: Option<usize>,
        message: String,
    },

    /// The completion barrier resolved without a result for every sequence.
    #[error("batch incomplete: expected {expected} sorted sequences, received {received}")]
    Incomplete { expected: usize, received: usize },
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
