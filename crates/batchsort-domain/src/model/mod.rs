//! Batch data model.

mod types;
mod types_proptest;

pub use types::{Batch, Dispatched, Sequence, Strategy};
