/*
 * Responsibility
 * - GET /time-ranges/status: start/end から TimeRange を組み立て、各述語を返す
 * - end < start は TimeRangeError → 400 INVALID_RANGE
 */
use axum::{Json, extract::Query};
use chrono::Utc;

use crate::{
    api::v1::dto::time_ranges::{TimeRangeQuery, TimeRangeStatusResponse},
    domain::TimeRange,
    error::{AppError, ErrorResponse},
};

#[utoipa::path(
    get,
    path = "/api/v1/time-ranges/status",
    params(TimeRangeQuery),
    responses(
        (status = 200, description = "Range predicates evaluated at `at`", body = TimeRangeStatusResponse),
        (status = 400, description = "end precedes start", body = ErrorResponse),
    ),
    security(()),
    tag = "time-ranges"
)]
pub async fn time_range_status(
    Query(query): Query<TimeRangeQuery>,
) -> Result<Json<TimeRangeStatusResponse>, AppError> {
    let range = TimeRange::new(query.start, query.end)?;
    let at = query.at.unwrap_or_else(Utc::now);

    Ok(Json(TimeRangeStatusResponse::new(&range, at)))
}
