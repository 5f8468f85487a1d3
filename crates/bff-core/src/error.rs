//! Error types for the BFF core.
//!
//! Configuration errors are fatal at startup: the server never binds a
//! listener when [`ConfigError`] is returned. Validation errors are per
//! request and map to `400 Bad Request` in the server crate.

use thiserror::Error;

/// Errors raised while building the Contentstack client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required variables are absent or empty.
    #[error(
        "missing required Contentstack environment variables: {}",
        .0.join(", ")
    )]
    MissingVars(Vec<&'static str>),

    /// The region is not one of the known Contentstack regions.
    #[error("invalid region '{0}': expected one of us, eu, azure-na, azure-eu, gcp-na")]
    InvalidRegion(String),

    /// A variable is present but its value cannot be used.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// The underlying configuration source failed.
    #[error("configuration source error: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    /// Creates a new invalid value error.
    pub fn invalid_value(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name,
            reason: reason.into(),
        }
    }
}

/// Errors raised when a request parameter cannot be used in a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value is empty.
    #[error("{field} cannot be empty")]
    Empty {
        /// Parameter name
        field: &'static str,
    },

    /// The value contains characters outside the GraphQL identifier set.
    #[error("{field} must contain only letters, digits and underscores, got '{value}'")]
    InvalidIdentifier {
        /// Parameter name
        field: &'static str,
        /// The rejected value
        value: String,
    },
}
