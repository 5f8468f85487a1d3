//! reqwest-backed executor for the GraphQL Delivery API.

use async_trait::async_trait;
use bff_core::ClientConfig;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::QueryExecutor;
use crate::error::GraphqlError;

/// Header carrying the delivery token.
const ACCESS_TOKEN_HEADER: &str = "access_token";

/// Header selecting a stack branch.
const BRANCH_HEADER: &str = "branch";

/// Header carrying the live preview token.
const PREVIEW_TOKEN_HEADER: &str = "preview_token";

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphqlErrorEntry {
    #[serde(default)]
    message: String,
}

impl GraphqlResponse {
    fn into_data(self) -> Result<Value, GraphqlError> {
        let errors = self.errors.unwrap_or_default();
        if !errors.is_empty() {
            let messages = errors.into_iter().map(|e| e.message).collect();
            return Err(GraphqlError::response(messages));
        }
        Ok(self.data.unwrap_or(Value::Null))
    }
}

/// Executes queries over HTTP POST against the configured endpoint.
///
/// Cheap to clone: the underlying `reqwest::Client` pools connections and is
/// shared between clones.
#[derive(Clone)]
pub struct HttpExecutor {
    client: Client,
    endpoint: String,
}

impl HttpExecutor {
    /// Builds an executor from the client configuration.
    ///
    /// The delivery token is sent as `access_token` on every request, the
    /// branch (when configured) as `branch` and, with live preview enabled,
    /// the preview token as `preview_token`. A timeout is applied only when
    /// one is configured.
    pub fn new(config: &ClientConfig) -> Result<Self, GraphqlError> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(config.delivery_token())
            .map_err(|_| GraphqlError::InvalidHeader(ACCESS_TOKEN_HEADER))?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static(ACCESS_TOKEN_HEADER), token);

        if let Some(branch) = config.branch() {
            let value = HeaderValue::from_str(branch)
                .map_err(|_| GraphqlError::InvalidHeader(BRANCH_HEADER))?;
            headers.insert(HeaderName::from_static(BRANCH_HEADER), value);
        }

        if let Some(preview_token) = config.preview_token() {
            let mut value = HeaderValue::from_str(preview_token)
                .map_err(|_| GraphqlError::InvalidHeader(PREVIEW_TOKEN_HEADER))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(PREVIEW_TOKEN_HEADER), value);
        }

        let mut builder = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("contentstack-bff/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(GraphqlError::Client)?;

        Ok(Self {
            client,
            endpoint: config.graphql_url().to_string(),
        })
    }

    /// Returns the endpoint queries are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, query: &str, variables: Option<Value>) -> Result<Value, GraphqlError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GraphqlError::status(status.as_u16(), body));
        }

        serde_json::from_str::<GraphqlResponse>(&body)?.into_data()
    }
}

#[async_trait]
impl QueryExecutor for HttpExecutor {
    #[instrument(skip_all, fields(executor = "http"))]
    async fn execute(&self, query: &str, variables: Option<Value>) -> Result<Value, GraphqlError> {
        debug!(query, variables = ?variables, "Executing GraphQL query");

        match self.send(query, variables).await {
            Ok(data) => {
                debug!(result = %data, "GraphQL query completed");
                Ok(data)
            },
            Err(e) => {
                error!(error = %e, "GraphQL query failed");
                Err(e)
            },
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> ClientConfig {
        ClientConfig::builder()
            .api_key("blt123")
            .delivery_token("cs_token")
            .environment("production")
            .build()
            .unwrap()
    }

    #[test]
    fn endpoint_comes_from_config() {
        let executor = HttpExecutor::new(&config()).unwrap();
        assert_eq!(
            executor.endpoint(),
            "https://graphql.contentstack.com/stacks/blt123?environment=production"
        );
        assert_eq!(executor.name(), "http");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let config = ClientConfig::builder()
            .api_key("blt123")
            .delivery_token("bad\ntoken")
            .environment("production")
            .build()
            .unwrap();
        let err = HttpExecutor::new(&config).err().unwrap();
        assert!(matches!(err, GraphqlError::InvalidHeader("access_token")));
    }

    #[test]
    fn response_with_errors_is_an_error() {
        let response: GraphqlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "Cannot query field \"all_nope\"" }]
        }))
        .unwrap();

        let err = response.into_data().unwrap_err();
        assert_eq!(
            err.to_string(),
            "GraphQL errors: Cannot query field \"all_nope\""
        );
    }

    #[test]
    fn null_errors_member_is_ignored() {
        let response: GraphqlResponse = serde_json::from_value(json!({
            "data": { "all_page": { "items": [] } },
            "errors": null
        }))
        .unwrap();

        assert_eq!(
            response.into_data().unwrap(),
            json!({ "all_page": { "items": [] } })
        );
    }

    #[test]
    fn response_without_data_is_null() {
        let response: GraphqlResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.into_data().unwrap(), Value::Null);
    }

    #[test]
    fn request_omits_absent_variables() {
        let body = serde_json::to_value(GraphqlRequest {
            query: "{ x }",
            variables: None,
        })
        .unwrap();
        assert_eq!(body, json!({ "query": "{ x }" }));
    }
}
