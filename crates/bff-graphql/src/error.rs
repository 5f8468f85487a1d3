//! Error types for GraphQL execution.

/// Errors that can occur when executing a query against the Delivery API.
///
/// Errors are propagated to the caller unchanged: there is no retry and no
/// backoff at this layer.
#[derive(Debug, thiserror::Error)]
pub enum GraphqlError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A configured value cannot be sent as an HTTP header.
    #[error("invalid value for header '{0}'")]
    InvalidHeader(&'static str),

    /// The request did not complete (connect, TLS, timeout, body read).
    #[error("request to GraphQL endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    #[error("GraphQL endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The endpoint answered 2xx but reported GraphQL errors.
    #[error("GraphQL errors: {}", messages.join("; "))]
    Response { messages: Vec<String> },

    /// The response body is not a GraphQL JSON envelope.
    #[error("invalid GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GraphqlError {
    /// Creates a new status error.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Creates a new GraphQL response error.
    pub fn response(messages: Vec<String>) -> Self {
        Self::Response { messages }
    }

    /// Returns true if the upstream reported that the content does not exist.
    ///
    /// Besides an HTTP 404 status, any error whose message carries the
    /// literal `404` counts, which is how the Delivery API reports unknown
    /// content types inside GraphQL error messages.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Status { status: 404, .. } => true,
            other => other.to_string().contains("404"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GraphqlError::status(502, "bad gateway");
        assert_eq!(err.to_string(), "GraphQL endpoint returned 502: bad gateway");

        let err = GraphqlError::response(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "GraphQL errors: first; second");

        let err = GraphqlError::InvalidHeader("access_token");
        assert_eq!(err.to_string(), "invalid value for header 'access_token'");
    }

    #[test]
    fn test_is_not_found() {
        assert!(GraphqlError::status(404, "").is_not_found());
        assert!(GraphqlError::response(vec!["404 | Not found".into()]).is_not_found());
        assert!(
            GraphqlError::response(vec!["Schema for all_missing returned 404".into()])
                .is_not_found()
        );
        assert!(!GraphqlError::status(500, "boom").is_not_found());
        assert!(!GraphqlError::response(vec!["Cannot query field".into()]).is_not_found());
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: GraphqlError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid GraphQL response"));
        assert!(!err.is_not_found());
    }
}
