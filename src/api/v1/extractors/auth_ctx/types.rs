/*
 * Responsibility
 * - Handler から見える「検証済み token」のコンテキスト
 * - access middleware が検証後に request extensions に格納する
 *
 * Notes
 * - user の特定はここではしない (CurrentUser extractor → IdentityResolver の責務)
 */
use crate::services::auth::access_jwt::AccessTokenClaims;

#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub jti: Option<String>,
}

impl From<AccessTokenClaims> for AuthCtx {
    fn from(claims: AccessTokenClaims) -> Self {
        Self { jti: claims.jti }
    }
}
