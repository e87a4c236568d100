/*
 * Responsibility
 * - 認証済みリクエストから User を解決して handler に渡す
 * - AuthCtx が無い (= access middleware を通っていない) なら 401
 * - token → user id → UserStore の解決は IdentityResolver に任せ、None は全て 401
 */
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::repos::UserRow;
use crate::services::IdentityResolver;
use crate::state::AppState;

use super::{AuthCtx, AuthCtxExtractor};

#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: UserRow,
    pub auth: AuthCtx,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Claims are only trusted after the middleware verified the signature.
        let AuthCtxExtractor(auth) = AuthCtxExtractor::from_request_parts(parts, state).await?;

        let user = IdentityResolver::resolve_user(&parts.headers, state.users.as_ref())
            .await
            .ok_or_else(|| {
                tracing::debug!(jti = ?auth.jti, "token did not resolve to a user");
                AppError::Unauthorized
            })?;

        Ok(Self { user, auth })
    }
}
