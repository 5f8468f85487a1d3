//! Metrics module for the BFF server.

pub mod http;
pub mod setup;
pub mod upstream;

pub use setup::{detached_handle, init_metrics};
