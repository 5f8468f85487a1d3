use axum::http::Uri;

use crate::error::AppError;

/// Responds to any unmatched route.
pub async fn route_not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::RouteNotFound
}
