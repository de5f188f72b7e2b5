//! Handler for link visit statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::application::services::parse_id;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the visit count of a short link.
///
/// # Endpoint
///
/// `GET /{api_prefix}/v{api_version}/stats/{id}`
///
/// # Response
///
/// ```json
/// { "visits": 5 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `id` is not an integer.
/// Returns 404 Not Found if no link has this id.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let id = parse_id(&raw_id)?;

    let visits = state.stats_service.visits(id).await?;

    Ok(Json(StatsResponse { visits }))
}
