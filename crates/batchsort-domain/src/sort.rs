//! Per-sequence sort seam.

use crate::model::Sequence;

/// Sorts a single sequence in place, ascending.
///
/// Implementations are shared across executor tasks, so they must be
/// `Send + Sync + 'static`.
pub trait Sorter: Send + Sync + 'static {
    fn sort(&self, sequence: &mut Sequence);
}

/// The standard library's unstable sort.
///
/// Duplicates are indistinguishable integers, so stability buys nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSorter;

impl Sorter for StandardSorter {
    fn sort(&self, sequence: &mut Sequence) {
        sequence.sort_unstable();
    }
}
