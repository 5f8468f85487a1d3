//! BFF Core - Domain types and configuration
//!
//! This crate provides the foundational types for the Contentstack BFF:
//! the immutable [`ClientConfig`], the identifier newtypes that make query
//! templating safe, and the [`EntriesQueryRequest`] handed to the GraphQL
//! layer.

pub mod config;
pub mod error;
pub mod request;
pub mod types;

pub use config::{ClientConfig, ClientConfigBuilder, ENV_PREFIX, LivePreviewConfig, Region};
pub use error::{ConfigError, ValidationError};
pub use request::{EntriesQueryRequest, parse_variants};
pub use types::{ContentTypeUid, DEFAULT_FIELDS, FieldName};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
