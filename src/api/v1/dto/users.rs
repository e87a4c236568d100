/*
 * Responsibility
 * - Users の response DTO
 */
use serde::Serialize;
use utoipa::ToSchema;

use crate::repos::UserRow;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub user_name: String,
    pub image_url: Option<String>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            user_name: row.user_name,
            image_url: row.image_url,
        }
    }
}
