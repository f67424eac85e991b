//! Dispatcher implementation.

use std::sync::Arc;
use std::time::Instant;

use batchsort_domain::{
    Batch, ConcurrentExecutor, DispatchResult, Dispatched, Executor, SequentialExecutor, Sorter,
    StandardSorter, Strategy,
};
use tracing::Instrument;

/// Runs one strategy over a batch and times the sort phase.
///
/// Both executors share the same sorter. The dispatcher holds no
/// per-request state, so one instance is shared across all requests.
pub struct Dispatcher<S: Sorter = StandardSorter> {
    sequential: SequentialExecutor<S>,
    concurrent: ConcurrentExecutor<S>,
}

impl Dispatcher<StandardSorter> {
    /// Creates a dispatcher backed by the standard library sort.
    pub fn new() -> Self {
        Self::with_sorter(Arc::new(StandardSorter))
    }
}

impl Default for Dispatcher<StandardSorter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sorter> Dispatcher<S> {
    /// Creates a dispatcher with a custom sorter.
    pub fn with_sorter(sorter: Arc<S>) -> Self {
        Self {
            sequential: SequentialExecutor::new(Arc::clone(&sorter)),
            concurrent: ConcurrentExecutor::new(sorter),
        }
    }

    fn executor(&self, strategy: Strategy) -> &dyn Executor {
        match strategy {
            Strategy::Sequential => &self.sequential,
            Strategy::Concurrent => &self.concurrent,
        }
    }

    /// Sorts every sequence of `batch` with the given strategy.
    ///
    /// The batch is taken by value; the sorted batch in the result is the
    /// only view of the data after the call. Exactly one executor runs, and
    /// it has fully completed before the clock is read again.
    pub async fn run(&self, batch: Batch, strategy: Strategy) -> DispatchResult<Dispatched> {
        let span = tracing::debug_span!(
            "dispatch",
            strategy = %strategy,
            sequences = batch.len(),
            elements = batch.element_count(),
        );
        let executor = self.executor(strategy);

        async move {
            let start = Instant::now();
            let result = executor.execute(batch).await;
            let elapsed = start.elapsed();

            match result {
                Ok(sorted) => {
                    let dispatched = Dispatched::new(sorted, elapsed);
                    tracing::debug!(time_ns = dispatched.time_ns(), "batch sorted");
                    Ok(dispatched)
                }
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        elapsed_ns = elapsed.as_nanos() as u64,
                        "sort phase failed"
                    );
                    Err(err)
                }
            }
        }
        .instrument(span)
        .await
    }
}
