//! Query execution.

mod http;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::GraphqlError;

pub use http::HttpExecutor;

/// Something that can run a GraphQL query and return its `data` member.
///
/// The server holds an `Arc<dyn QueryExecutor>` so handlers can be exercised
/// against stubs without a network.
///
/// # Implementors
///
/// - `HttpExecutor` - POSTs to the Contentstack GraphQL Delivery API
///
/// # Example
///
/// ```ignore
/// use bff_graphql::{GraphqlError, QueryExecutor};
///
/// struct Canned(serde_json::Value);
///
/// #[async_trait]
/// impl QueryExecutor for Canned {
///     async fn execute(&self, _query: &str, _variables: Option<Value>) -> Result<Value, GraphqlError> {
///         Ok(self.0.clone())
///     }
///
///     fn name(&self) -> &str {
///         "canned"
///     }
/// }
/// ```
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Executes `query` with optional `variables`.
    ///
    /// # Errors
    ///
    /// - `GraphqlError::Transport` if the request could not be sent
    /// - `GraphqlError::Status` if the endpoint answered with a non-2xx status
    /// - `GraphqlError::Response` if the body carries GraphQL errors
    async fn execute(&self, query: &str, variables: Option<Value>) -> Result<Value, GraphqlError>;

    /// Returns the name of this executor, used in logs.
    fn name(&self) -> &str;
}
