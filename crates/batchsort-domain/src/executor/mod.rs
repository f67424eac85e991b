//! Sort executors.
//!
//! An executor takes ownership of a [`Batch`] and returns it with every
//! sequence sorted, preserving positions. Two implementations exist:
//!
//! - [`SequentialExecutor`] sorts sequences in index order on the calling
//!   task and never suspends.
//! - [`ConcurrentExecutor`] sorts each sequence in its own blocking task and
//!   waits on a completion barrier until every task has reported.

mod concurrent;
mod sequential;

pub use concurrent::ConcurrentExecutor;
pub use sequential::SequentialExecutor;

use async_trait::async_trait;

use crate::error::DispatchResult;
use crate::model::{Batch, Strategy};

/// Executes one sort strategy over a whole batch.
#[async_trait]
pub trait Executor: Send + Sync {
    /// The strategy this executor implements.
    fn strategy(&self) -> Strategy;

    /// Sorts every sequence of `batch`. Output position `i` holds the sorted
    /// contents of input position `i`.
    async fn execute(&self, batch: Batch) -> DispatchResult<Batch>;
}

#[cfg(test)]
mod tests_proptest;
