//! Fan-out/join executor: one blocking task per sequence.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinSet;

use super::Executor;
use crate::error::{DispatchError, DispatchResult};
use crate::model::{Batch, Sequence, Strategy};
use crate::sort::Sorter;

/// What a sort task reports into the join: its slot index and either the
/// sorted sequence or the panic message.
type TaskReport = (usize, Result<Sequence, String>);

/// Sorts every sequence in its own task and blocks until all of them report.
///
/// # Partitioning
///
/// Each task takes ownership of exactly one sequence together with its
/// index and hands it back when done. Tasks share nothing but the sorter,
/// so no locking is needed; the result for index `i` is written to slot
/// `i` after the barrier.
///
/// # Scheduling
///
/// Tasks run on Tokio's blocking pool, i.e. real OS threads rather than
/// cooperative tasks on the async workers. There is no per-batch cap: a
/// batch of N sequences dispatches N tasks, and the runtime queues what
/// exceeds the blocking pool size.
///
/// # Failures
///
/// A panicking sorter is caught inside its task and reported into the join
/// as an error, so the barrier always resolves. The executor keeps draining
/// until every task has reported and only then returns
/// [`DispatchError::TaskPanicked`] for the lowest failing index. A partially
/// sorted batch is never returned.
pub struct ConcurrentExecutor<S: Sorter> {
    sorter: Arc<S>,
}

impl<S: Sorter> ConcurrentExecutor<S> {
    pub fn new(sorter: Arc<S>) -> Self {
        Self { sorter }
    }

    fn spawn_all(&self, sequences: Vec<Sequence>) -> JoinSet<TaskReport> {
        let mut tasks = JoinSet::new();
        for (index, mut sequence) in sequences.into_iter().enumerate() {
            let sorter = Arc::clone(&self.sorter);
            tasks.spawn_blocking(move || {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| sorter.sort(&mut sequence)));
                match outcome {
                    Ok(()) => (index, Ok(sequence)),
                    Err(payload) => (index, Err(panic_message(payload.as_ref()))),
                }
            });
        }
        tasks
    }
}

#[async_trait]
impl<S: Sorter> Executor for ConcurrentExecutor<S> {
    fn strategy(&self) -> Strategy {
        Strategy::Concurrent
    }

    async fn execute(&self, batch: Batch) -> DispatchResult<Batch> {
        let expected = batch.len();
        if expected == 0 {
            return Ok(batch);
        }

        let mut tasks = self.spawn_all(batch.into_inner());
        tracing::trace!(tasks = expected, "sort tasks dispatched");

        let mut slots: Vec<Option<Sequence>> = vec![None; expected];
        let mut panicked: Option<(usize, String)> = None;
        let mut aborted: Option<String> = None;
        let mut duplicates = 0usize;

        // Completion barrier: drain every task, even after a failure.
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, Ok(sequence))) => {
                    if slots[index].replace(sequence).is_some() {
                        tracing::error!(index, "sort task reported twice");
                        duplicates += 1;
                    }
                }
                Ok((index, Err(message))) => {
                    tracing::warn!(index, %message, "sort task panicked");
                    if panicked.as_ref().map_or(true, |(first, _)| index < *first) {
                        panicked = Some((index, message));
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "sort task did not complete");
                    aborted.get_or_insert_with(|| err.to_string());
                }
            }
        }

        if let Some((index, message)) = panicked {
            return Err(DispatchError::TaskPanicked { index, message });
        }
        if let Some(message) = aborted {
            let index = slots.iter().position(Option::is_none);
            return Err(DispatchError::TaskAborted { index, message });
        }

        let received = slots.iter().filter(|slot| slot.is_some()).count() + duplicates;
        if duplicates > 0 {
            return Err(DispatchError::Incomplete { expected, received });
        }
        slots
            .into_iter()
            .collect::<Option<Vec<Sequence>>>()
            .map(Batch::from)
            .ok_or(DispatchError::Incomplete { expected, received })
    }
}

/// Extracts a readable message from a panic payload.
pub(super) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
