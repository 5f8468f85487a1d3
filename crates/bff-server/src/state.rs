//! Application state.

use std::sync::Arc;

use bff_graphql::{HttpExecutor, QueryExecutor};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The GraphQL executor (HTTP in production, stubs in tests).
    executor: Arc<dyn QueryExecutor>,
}

impl AppState {
    /// Creates a new AppState with the given executor.
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    /// Creates an AppState from an HttpExecutor.
    pub fn from_http_executor(executor: HttpExecutor) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    /// Returns a reference to the executor.
    pub fn executor(&self) -> &dyn QueryExecutor {
        self.executor.as_ref()
    }
}
