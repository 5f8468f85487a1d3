//! HTTP handlers.

pub mod entries;
pub mod fallback;
pub mod health;
pub mod metrics;
pub mod personalized;
pub mod response;
pub mod root;
