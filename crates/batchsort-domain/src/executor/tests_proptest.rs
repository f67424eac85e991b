//! Property-based tests for executor equivalence and correctness.

use std::sync::{Arc, OnceLock};

use proptest::prelude::*;
use tokio::runtime::Runtime;

use super::{ConcurrentExecutor, Executor, SequentialExecutor};
use crate::model::Batch;
use crate::sort::StandardSorter;

fn runtime() -> &'static Runtime {
    static RUNTIME: OnceLock<Runtime> = OnceLock::new();
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("failed to build test runtime")
    })
}

fn sequential(batch: Batch) -> Batch {
    let executor = SequentialExecutor::new(Arc::new(StandardSorter));
    runtime().block_on(executor.execute(batch)).unwrap()
}

fn concurrent(batch: Batch) -> Batch {
    let executor = ConcurrentExecutor::new(Arc::new(StandardSorter));
    runtime().block_on(executor.execute(batch)).unwrap()
}

fn batch_strategy() -> impl Strategy<Value = Batch> {
    prop::collection::vec(prop::collection::vec(any::<i64>(), 0..32), 0..16).prop_map(Batch::from)
}

/// Sorted copy of every sequence, computed independently of the executors.
fn multiset_view(batch: &Batch) -> Vec<Vec<i64>> {
    batch
        .sequences()
        .iter()
        .map(|sequence| {
            let mut copy = sequence.clone();
            copy.sort();
            copy
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_every_sequence_is_a_sorted_permutation(batch in batch_strategy()) {
        let expected = multiset_view(&batch);
        for output in [sequential(batch.clone()), concurrent(batch.clone())] {
            prop_assert!(output.is_sorted());
            prop_assert_eq!(output.into_inner(), expected.clone());
        }
    }

    #[test]
    fn test_sequential_and_concurrent_agree(batch in batch_strategy()) {
        prop_assert_eq!(sequential(batch.clone()), concurrent(batch));
    }

    #[test]
    fn test_sorting_twice_changes_nothing(batch in batch_strategy()) {
        let once = sequential(batch);
        prop_assert_eq!(sequential(once.clone()), once.clone());
        prop_assert_eq!(concurrent(once.clone()), once);
    }

    #[test]
    fn test_shape_is_preserved(batch in batch_strategy()) {
        let lengths: Vec<usize> = batch.sequences().iter().map(Vec::len).collect();
        let output = concurrent(batch.clone());
        prop_assert_eq!(output.len(), batch.len());
        let output_lengths: Vec<usize> = output.sequences().iter().map(Vec::len).collect();
        prop_assert_eq!(output_lengths, lengths);
    }
}
