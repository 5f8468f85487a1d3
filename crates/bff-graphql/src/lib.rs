//! # BFF GraphQL
//!
//! Query construction and execution against the Contentstack GraphQL
//! Delivery API.
//!
//! ## Example
//!
//! ```ignore
//! use bff_core::{ClientConfig, ContentTypeUid, FieldName};
//! use bff_graphql::{HttpExecutor, QueryExecutor, build_list_entries_query};
//!
//! let config = ClientConfig::from_env()?;
//! let executor = HttpExecutor::new(&config)?;
//!
//! let uid = ContentTypeUid::parse("blog_post")?;
//! let query = build_list_entries_query(&uid, &FieldName::defaults());
//! let data = executor.execute(&query, None).await?;
//! ```

pub mod error;
pub mod executor;
pub mod query;

// Re-exports
pub use error::GraphqlError;
pub use executor::{HttpExecutor, QueryExecutor};
pub use query::{
    LIST_ENTRIES_OPERATION, PERSONALIZED_CONFIG_OPERATION, build_list_entries_query,
    build_list_entries_variables, build_personalized_config_query,
};

// Re-export bff_core for consumers
pub use bff_core;
