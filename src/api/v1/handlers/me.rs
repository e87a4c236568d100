/*
 * Responsibility
 * - GET /me: bearer token から解決した User を返す
 * - 解決できない場合の 401 は CurrentUser extractor 側で返る
 */
use axum::Json;

use crate::api::v1::{dto::users::UserResponse, extractors::CurrentUser};
use crate::error::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/v1/me",
    responses(
        (status = 200, description = "Authenticated user", body = UserResponse),
        (status = 401, description = "Missing, invalid or unresolvable token", body = ErrorResponse),
    ),
    tag = "identity"
)]
pub async fn get_me(current: CurrentUser) -> Json<UserResponse> {
    Json(current.user.into())
}
