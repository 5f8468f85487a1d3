//! Personalization config endpoint handler.

use axum::{Json, extract::State};
use bff_graphql::{PERSONALIZED_CONFIG_OPERATION, build_personalized_config_query};
use serde_json::Value;
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::ContentQuery;
use crate::handlers::response::SuccessResponse;
use crate::metrics::upstream::{UpstreamOutcome, record_upstream_query};
use crate::state::AppState;

/// Path of the items list inside the query's `data` member.
const ITEMS_POINTER: &str = "/all_personalize_config/items";

/// Handler for GET /api/personalized-config.
///
/// The query takes no parameters, but `locale` and `contentTypeUid` are
/// still required: existing clients send them and rely on the 400 contract.
#[instrument(skip_all)]
pub async fn get_personalized_config(
    State(state): State<AppState>,
    ContentQuery(params): ContentQuery,
) -> Result<Json<SuccessResponse<Value>>, AppError> {
    let (locale, content_type_uid) = params.require_common()?;
    tracing::info!(locale, content_type_uid, "Fetching personalize config");

    let mut data = state
        .executor()
        .execute(build_personalized_config_query(), None)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                executor = state.executor().name(),
                "Error fetching personalize config"
            );
            record_upstream_query(PERSONALIZED_CONFIG_OPERATION, UpstreamOutcome::of(&e));
            AppError::upstream(&e)
        })?;

    record_upstream_query(PERSONALIZED_CONFIG_OPERATION, UpstreamOutcome::Ok);

    let items = data
        .pointer_mut(ITEMS_POINTER)
        .map(Value::take)
        .ok_or_else(|| {
            AppError::Internal(
                "upstream response is missing all_personalize_config.items".to_string(),
            )
        })?;

    Ok(Json(SuccessResponse::new(items)))
}
