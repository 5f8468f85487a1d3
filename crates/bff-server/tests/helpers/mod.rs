//! Test helpers para bff-server.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod client;
pub mod stub;

pub use assertions::*;
pub use client::{TestClient, TestResponse, client, client_with};
pub use stub::StubExecutor;
