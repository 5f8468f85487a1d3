//! Contentstack client configuration.
//!
//! Built once at process start and shared read-only afterwards. The server
//! refuses to start when [`ClientConfig::from_env`] fails.
//!
//! # Environment Variables
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `CONTENTSTACK_API_KEY` | yes | Stack API key |
//! | `CONTENTSTACK_DELIVERY_TOKEN` | yes | Delivery token, sent as `access_token` |
//! | `CONTENTSTACK_ENVIRONMENT` | yes | Publishing environment |
//! | `CONTENTSTACK_REGION` | no | `us` (default), `eu`, `azure-na`, `azure-eu`, `gcp-na` |
//! | `CONTENTSTACK_GRAPHQL_URL` | no | GraphQL base URL, overrides host and region |
//! | `CONTENTSTACK_BRANCH` | no | Stack branch, sent as the `branch` header |
//! | `CONTENTSTACK_HOST` | no | GraphQL host, overrides the region endpoint |
//! | `CONTENTSTACK_LIVE_PREVIEW` | no | Enables live preview (`true`/`false`) |
//! | `CONTENTSTACK_PREVIEW_HOST` | no | GraphQL host used while live preview is enabled |
//! | `CONTENTSTACK_PREVIEW_TOKEN` | no | Sent as `preview_token`, required with live preview |
//!
//! Endpoint resolution, first match wins: the preview host (live preview
//! only), `CONTENTSTACK_GRAPHQL_URL`, `CONTENTSTACK_HOST`, the region.
//! Hosts without a scheme get `https://`; all of them are served under
//! `/stacks`.
//! | `CONTENTSTACK_TIMEOUT_MS` | no | Upstream request timeout, unset means none |

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::ConfigError;

/// Prefix shared by every Contentstack variable.
pub const ENV_PREFIX: &str = "CONTENTSTACK";

const API_KEY_VAR: &str = "CONTENTSTACK_API_KEY";
const DELIVERY_TOKEN_VAR: &str = "CONTENTSTACK_DELIVERY_TOKEN";
const ENVIRONMENT_VAR: &str = "CONTENTSTACK_ENVIRONMENT";
const PREVIEW_TOKEN_VAR: &str = "CONTENTSTACK_PREVIEW_TOKEN";
const TIMEOUT_VAR: &str = "CONTENTSTACK_TIMEOUT_MS";

/// Contentstack hosting region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Us,
    Eu,
    AzureNa,
    AzureEu,
    GcpNa,
}

impl Region {
    /// Returns the region name as used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::AzureNa => "azure-na",
            Region::AzureEu => "azure-eu",
            Region::GcpNa => "gcp-na",
        }
    }

    /// Returns the GraphQL Delivery API base URL for this region.
    pub fn graphql_base_url(&self) -> &'static str {
        match self {
            Region::Us => "https://graphql.contentstack.com/stacks",
            Region::Eu => "https://eu-graphql.contentstack.com/stacks",
            Region::AzureNa => "https://azure-na-graphql.contentstack.com/stacks",
            Region::AzureEu => "https://azure-eu-graphql.contentstack.com/stacks",
            Region::GcpNa => "https://gcp-na-graphql.contentstack.com/stacks",
        }
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "us" | "na" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "azure-na" => Ok(Region::AzureNa),
            "azure-eu" => Ok(Region::AzureEu),
            "gcp-na" => Ok(Region::GcpNa),
            _ => Err(ConfigError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live preview settings.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LivePreviewConfig {
    pub enabled: bool,
    pub host: Option<String>,
    pub preview_token: Option<String>,
}

impl fmt::Debug for LivePreviewConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LivePreviewConfig")
            .field("enabled", &self.enabled)
            .field("host", &self.host)
            .field("preview_token", &self.preview_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Raw values as read from the environment, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSettings {
    api_key: Option<String>,
    delivery_token: Option<String>,
    environment: Option<String>,
    region: Option<String>,
    graphql_url: Option<String>,
    branch: Option<String>,
    host: Option<String>,
    live_preview: Option<bool>,
    preview_host: Option<String>,
    preview_token: Option<String>,
    timeout_ms: Option<u64>,
}

/// Immutable Contentstack client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    api_key: String,
    delivery_token: String,
    environment: String,
    region: Region,
    graphql_url: String,
    branch: Option<String>,
    host: Option<String>,
    live_preview: LivePreviewConfig,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Creates a new builder for ClientConfig.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The environment source used by [`ClientConfig::from_env`].
    ///
    /// Tests call `.source(Some(map))` on it to avoid touching process state.
    pub fn env_source() -> Environment {
        Environment::with_prefix(ENV_PREFIX).prefix_separator("_")
    }

    /// Loads configuration from `CONTENTSTACK_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Self::env_source())
    }

    /// Loads configuration from an explicit environment source.
    pub fn from_source(source: Environment) -> Result<Self, ConfigError> {
        let raw: RawSettings = Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        let mut builder = ClientConfig::builder()
            .live_preview(raw.live_preview.unwrap_or(false));
        builder.api_key = raw.api_key;
        builder.delivery_token = raw.delivery_token;
        builder.environment = raw.environment;
        builder.region = raw.region;
        builder.graphql_base_url = raw.graphql_url;
        builder.branch = raw.branch;
        builder.host = raw.host;
        builder.preview_host = raw.preview_host;
        builder.preview_token = raw.preview_token;
        builder.timeout_ms = raw.timeout_ms;

        let config = builder.build()?;
        tracing::debug!(
            region = %config.region,
            environment = %config.environment,
            "Contentstack configuration loaded"
        );
        Ok(config)
    }

    /// Returns the stack API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the delivery token.
    pub fn delivery_token(&self) -> &str {
        &self.delivery_token
    }

    /// Returns the publishing environment.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Returns the region.
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the full GraphQL endpoint URL.
    pub fn graphql_url(&self) -> &str {
        &self.graphql_url
    }

    /// Returns the branch, if configured.
    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    /// Returns the delivery host override, if configured.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the live preview settings.
    pub fn live_preview(&self) -> &LivePreviewConfig {
        &self.live_preview
    }

    /// Returns the preview token to send, only while live preview is enabled.
    pub fn preview_token(&self) -> Option<&str> {
        if self.live_preview.enabled {
            self.live_preview.preview_token.as_deref()
        } else {
            None
        }
    }

    /// Returns the upstream timeout. `None` means transport defaults.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("delivery_token", &"***")
            .field("environment", &self.environment)
            .field("region", &self.region)
            .field("graphql_url", &self.graphql_url)
            .field("branch", &self.branch)
            .field("host", &self.host)
            .field("live_preview", &self.live_preview)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    api_key: Option<String>,
    delivery_token: Option<String>,
    environment: Option<String>,
    region: Option<String>,
    graphql_base_url: Option<String>,
    branch: Option<String>,
    host: Option<String>,
    live_preview: bool,
    preview_host: Option<String>,
    preview_token: Option<String>,
    timeout_ms: Option<u64>,
}

impl ClientConfigBuilder {
    /// Sets the stack API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the delivery token.
    pub fn delivery_token(mut self, token: impl Into<String>) -> Self {
        self.delivery_token = Some(token.into());
        self
    }

    /// Sets the publishing environment.
    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Sets the region name.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the GraphQL base URL, overriding the region default.
    pub fn graphql_base_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_base_url = Some(url.into());
        self
    }

    /// Sets the branch.
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Sets the delivery host override.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Enables or disables live preview.
    pub fn live_preview(mut self, enabled: bool) -> Self {
        self.live_preview = enabled;
        self
    }

    /// Sets the live preview host.
    pub fn preview_host(mut self, host: impl Into<String>) -> Self {
        self.preview_host = Some(host.into());
        self
    }

    /// Sets the live preview token.
    pub fn preview_token(mut self, token: impl Into<String>) -> Self {
        self.preview_token = Some(token.into());
        self
    }

    /// Sets the upstream timeout in milliseconds.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Validates the collected values and derives the GraphQL URL.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let api_key = non_empty(self.api_key);
        let delivery_token = non_empty(self.delivery_token);
        let environment = non_empty(self.environment);

        let (api_key, delivery_token, environment) = match (api_key, delivery_token, environment)
        {
            (Some(k), Some(t), Some(e)) => (k, t, e),
            (k, t, e) => {
                let missing = [
                    (k.is_none(), API_KEY_VAR),
                    (t.is_none(), DELIVERY_TOKEN_VAR),
                    (e.is_none(), ENVIRONMENT_VAR),
                ]
                .into_iter()
                .filter_map(|(absent, name)| absent.then_some(name))
                .collect();
                return Err(ConfigError::MissingVars(missing));
            },
        };

        let region = match non_empty(self.region) {
            Some(r) => r.parse()?,
            None => Region::default(),
        };

        let preview_token = non_empty(self.preview_token);
        if self.live_preview && preview_token.is_none() {
            return Err(ConfigError::invalid_value(
                PREVIEW_TOKEN_VAR,
                "required when live preview is enabled",
            ));
        }

        let host = non_empty(self.host);
        let preview_host = non_empty(self.preview_host);

        let base_url = match (self.live_preview, &preview_host) {
            (true, Some(preview)) => stacks_url(preview),
            _ => match (non_empty(self.graphql_base_url), &host) {
                (Some(url), _) => url.trim_end_matches('/').to_string(),
                (None, Some(host)) => stacks_url(host),
                (None, None) => region.graphql_base_url().to_string(),
            },
        };
        let graphql_url = format!("{base_url}/{api_key}?environment={environment}");

        let timeout = match self.timeout_ms {
            Some(0) => {
                return Err(ConfigError::invalid_value(
                    TIMEOUT_VAR,
                    "must be greater than zero",
                ));
            },
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };

        Ok(ClientConfig {
            api_key,
            delivery_token,
            environment,
            region,
            graphql_url,
            branch: non_empty(self.branch),
            host,
            live_preview: LivePreviewConfig {
                enabled: self.live_preview,
                host: preview_host,
                preview_token,
            },
            timeout,
        })
    }
}

/// `{host}/stacks`, with `https://` added when the host has no scheme.
fn stacks_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.contains("://") {
        format!("{host}/stacks")
    } else {
        format!("https://{host}/stacks")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
