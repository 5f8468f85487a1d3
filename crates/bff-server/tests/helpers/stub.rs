//! Executor doubles.

use std::sync::Mutex;

use async_trait::async_trait;
use bff_graphql::{GraphqlError, QueryExecutor};
use serde_json::Value;

enum Outcome {
    Data(Value),
    Status(u16, String),
    Errors(Vec<String>),
}

/// Executor that returns a canned outcome and records every call.
pub struct StubExecutor {
    outcome: Outcome,
    calls: Mutex<Vec<(String, Option<Value>)>>,
}

impl StubExecutor {
    fn with(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always succeeds with `data`.
    pub fn data(data: Value) -> Self {
        Self::with(Outcome::Data(data))
    }

    /// Always fails with an HTTP status error.
    pub fn status(status: u16, body: &str) -> Self {
        Self::with(Outcome::Status(status, body.to_string()))
    }

    /// Always fails with a GraphQL error carrying `message`.
    pub fn error(message: &str) -> Self {
        Self::with(Outcome::Errors(vec![message.to_string()]))
    }

    /// Queries received so far.
    pub fn queries(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(q, _)| q.clone())
            .collect()
    }

    /// Variables received so far.
    pub fn variables(&self) -> Vec<Option<Value>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, v)| v.clone())
            .collect()
    }
}

#[async_trait]
impl QueryExecutor for StubExecutor {
    async fn execute(&self, query: &str, variables: Option<Value>) -> Result<Value, GraphqlError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), variables));

        match &self.outcome {
            Outcome::Data(data) => Ok(data.clone()),
            Outcome::Status(status, body) => Err(GraphqlError::status(*status, body.clone())),
            Outcome::Errors(messages) => Err(GraphqlError::response(messages.clone())),
        }
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Executor that panics, for the unhandled-error path.
pub struct PanickingExecutor;

#[async_trait]
impl QueryExecutor for PanickingExecutor {
    async fn execute(&self, _query: &str, _variables: Option<Value>) -> Result<Value, GraphqlError> {
        panic!("executor exploded");
    }

    fn name(&self) -> &str {
        "panicking"
    }
}
