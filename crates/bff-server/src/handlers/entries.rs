//! Entries endpoint handler.

use axum::{Json, extract::State};
use bff_graphql::{
    LIST_ENTRIES_OPERATION, build_list_entries_query, build_list_entries_variables,
};
use serde_json::Value;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::ContentQuery;
use crate::handlers::response::SuccessResponse;
use crate::metrics::upstream::{UpstreamOutcome, record_upstream_query};
use crate::state::AppState;

/// Handler for GET /api/entries.
///
/// Validate, execute, respond. The upstream `data` member is returned as is.
#[instrument(skip_all)]
pub async fn get_entries(
    State(state): State<AppState>,
    ContentQuery(params): ContentQuery,
) -> Result<Json<SuccessResponse<Value>>, AppError> {
    let request = params.into_entries_request()?;

    tracing::info!(
        content_type = %request.content_type_uid(),
        locale = request.locale(),
        variants = ?request.variants(),
        "Fetching entries"
    );

    let query = build_list_entries_query(request.content_type_uid(), request.fields());
    let variables = build_list_entries_variables(&request);

    let data = state
        .executor()
        .execute(&query, variables)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                executor = state.executor().name(),
                "Error fetching entries"
            );
            record_upstream_query(LIST_ENTRIES_OPERATION, UpstreamOutcome::of(&e));
            AppError::upstream(&e)
        })?;

    record_upstream_query(LIST_ENTRIES_OPERATION, UpstreamOutcome::Ok);
    Ok(Json(SuccessResponse::new(data)))
}
