//! Middleware stack para el servidor HTTP.
//!
//! Tower layers applied to every request:
//! - request id: generates or propagates `x-request-id`
//! - logging: one `http_request` span per request
//! - panic: turns a handler panic into a JSON 500
//! - cors: mirrors the caller's origin and allows credentials

mod cors;
mod logging;
mod panic;
mod request_id;

pub use cors::cors_layer;
pub use logging::{LogRequest, LogResponse, LoggingLayer, RequestSpan, logging_layer};
pub use panic::{PanicLayer, panic_layer};
pub use request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, REQUEST_ID_HEADER, SetRequestIdLayer,
    propagate_request_id_layer, set_request_id_layer,
};
