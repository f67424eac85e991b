//! Single-threaded executor.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use async_trait::async_trait;

use super::concurrent::panic_message;
use super::Executor;
use crate::error::{DispatchError, DispatchResult};
use crate::model::{Batch, Strategy};
use crate::sort::Sorter;

/// Sorts sequences one after another in index order `0..N`.
///
/// The processing order is deterministic, which keeps test runs
/// reproducible. No concurrency primitives are involved.
///
/// The sort runs on whichever thread polls [`Executor::execute`], which in
/// the server is a Tokio async worker. The future never yields, so a large
/// batch occupies that worker until it is done, and other requests
/// scheduled on the same worker wait behind it. Use the concurrent
/// executor when that latency matters.
///
/// A panicking sorter stops the pass at that index and is reported as
/// [`DispatchError::TaskPanicked`], matching the concurrent executor.
pub struct SequentialExecutor<S: Sorter> {
    sorter: Arc<S>,
}

impl<S: Sorter> SequentialExecutor<S> {
    pub fn new(sorter: Arc<S>) -> Self {
        Self { sorter }
    }

    /// Sorts the batch in place on the current thread.
    pub fn sort_in_place(&self, batch: &mut Batch) -> DispatchResult<()> {
        for (index, sequence) in batch.sequences_mut().iter_mut().enumerate() {
            panic::catch_unwind(AssertUnwindSafe(|| self.sorter.sort(sequence))).map_err(
                |payload| DispatchError::TaskPanicked {
                    index,
                    message: panic_message(payload.as_ref()),
                },
            )?;
        }
        Ok(())
    }
}

#[async_trait]
impl<S: Sorter> Executor for SequentialExecutor<S> {
    fn strategy(&self) -> Strategy {
        Strategy::Sequential
    }

    async fn execute(&self, mut batch: Batch) -> DispatchResult<Batch> {
        self.sort_in_place(&mut batch)?;
        Ok(batch)
    }
}
