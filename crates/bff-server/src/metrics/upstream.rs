//! Upstream GraphQL call metrics.

use bff_graphql::GraphqlError;
use metrics::counter;

pub const UPSTREAM_QUERIES_TOTAL: &str = "bff_upstream_queries_total";

/// How an upstream query ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamOutcome {
    Ok,
    NotFound,
    Error,
}

impl UpstreamOutcome {
    /// Classifies a failed query.
    pub fn of(err: &GraphqlError) -> Self {
        if err.is_not_found() {
            Self::NotFound
        } else {
            Self::Error
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }
}

/// Counts one upstream query by operation and outcome.
pub fn record_upstream_query(operation: &'static str, outcome: UpstreamOutcome) {
    counter!(
        UPSTREAM_QUERIES_TOTAL,
        "operation" => operation,
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

pub fn register_upstream_metrics() {
    metrics::describe_counter!(
        UPSTREAM_QUERIES_TOTAL,
        "Total number of GraphQL queries sent to Contentstack"
    );
}
