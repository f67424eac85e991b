//! Application state for HTTP handlers.

use std::sync::Arc;

use batchsort_domain::{Sorter, StandardSorter};
use batchsort_server::Dispatcher;

/// Application state shared across all HTTP handlers.
///
/// Holds only the dispatcher; no per-request state survives a request.
pub struct AppState<S: Sorter = StandardSorter> {
    pub dispatcher: Arc<Dispatcher<S>>,
}

impl AppState<StandardSorter> {
    /// Creates a state backed by the standard sort.
    pub fn new() -> Self {
        Self::with_dispatcher(Arc::new(Dispatcher::new()))
    }
}

impl Default for AppState<StandardSorter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Sorter> AppState<S> {
    pub fn with_dispatcher(dispatcher: Arc<Dispatcher<S>>) -> Self {
        Self { dispatcher }
    }
}

impl<S: Sorter> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}
