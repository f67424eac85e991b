//! Core types: sequences, batches, strategies and dispatch results.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// An ordered list of integers to sort ascending. May be empty.
pub type Sequence = Vec<i64>;

/// An ordered collection of sequences submitted and returned together.
///
/// Position is significant: the i-th output sequence corresponds to the
/// i-th input sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch(Vec<Sequence>);

impl Batch {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self(sequences)
    }

    /// Number of sequences in the batch.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of integers across all sequences.
    pub fn element_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.0
    }

    pub fn sequences_mut(&mut self) -> &mut [Sequence] {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<Sequence> {
        self.0
    }

    /// Returns true when every sequence is in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.0
            .iter()
            .all(|sequence| sequence.windows(2).all(|pair| pair[0] <= pair[1]))
    }
}

impl From<Vec<Sequence>> for Batch {
    fn from(sequences: Vec<Sequence>) -> Self {
        Self(sequences)
    }
}

impl From<Batch> for Vec<Sequence> {
    fn from(batch: Batch) -> Self {
        batch.0
    }
}

/// Execution model for one dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Sort every sequence one after another on the calling task.
    Sequential,
    /// Sort every sequence in its own task and join on all of them.
    Concurrent,
}

impl Strategy {
    /// Every strategy, in a stable order.
    pub const ALL: [Strategy; 2] = [Strategy::Sequential, Strategy::Concurrent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sorted batch paired with the wall-clock time of the sort phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub batch: Batch,
    /// Measured with a monotonic clock around the executor call only.
    pub elapsed: Duration,
}

impl Dispatched {
    pub fn new(batch: Batch, elapsed: Duration) -> Self {
        Self { batch, elapsed }
    }

    /// Elapsed time in nanoseconds, saturating at `u64::MAX`.
    pub fn time_ns(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}
