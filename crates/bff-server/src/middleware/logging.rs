//! Middleware de logging estructurado.

use std::time::Duration;

use axum::http::{Request, Response};
use tower_http::trace::{HttpMakeClassifier, MakeSpan, OnRequest, OnResponse, TraceLayer};
use tracing::{Span, info, info_span, warn};

use super::request_id::REQUEST_ID_HEADER;

/// Trace layer with the span and events used by this service.
pub type LoggingLayer = TraceLayer<HttpMakeClassifier, RequestSpan, LogRequest, LogResponse>;

/// Builds the request logging layer.
///
/// Must sit inside the layer that sets `x-request-id` so the span can
/// record it.
pub fn logging_layer() -> LoggingLayer {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_request(LogRequest)
        .on_response(LogResponse)
}

/// Opens an `http_request` span carrying request id, method and path.
///
/// The query string is left out: it carries caller-supplied values.
#[derive(Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");

        info_span!(
            "http_request",
            request_id = %request_id,
            method = %request.method(),
            path = %request.uri().path(),
        )
    }
}

#[derive(Clone, Copy, Default)]
pub struct LogRequest;

impl<B> OnRequest<B> for LogRequest {
    fn on_request(&mut self, _request: &Request<B>, _span: &Span) {
        info!("Request started");
    }
}

/// Logs status and latency; server errors at `warn`.
#[derive(Clone, Copy, Default)]
pub struct LogResponse;

impl<B> OnResponse<B> for LogResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, _span: &Span) {
        let status = response.status().as_u16();
        let duration_ms = whole_millis(latency);

        if response.status().is_server_error() {
            warn!(status, duration_ms, "Request completed");
        } else {
            info!(status, duration_ms, "Request completed");
        }
    }
}

/// Latency in whole milliseconds, saturating at `u64::MAX`.
fn whole_millis(latency: Duration) -> u64 {
    u64::try_from(latency.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_saturate_instead_of_wrapping() {
        assert_eq!(whole_millis(Duration::from_millis(1500)), 1500);
        assert_eq!(whole_millis(Duration::MAX), u64::MAX);
    }
}
