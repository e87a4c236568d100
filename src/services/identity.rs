//! Request → authenticated user.
//!
//! Claims are read WITHOUT signature verification. The access middleware
//! (`middleware::auth::access`) has already verified signature/iss/aud/exp for
//! every route this is used on; this module only derives the user from them.
//!
//! Every failure (missing header, malformed token, no id claim, non-integer id,
//! unknown user, store error) collapses to `None` = "not authenticated".

use axum::http::{HeaderMap, header};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde_json::{Map, Value};

use crate::repos::{UserRow, UserStore};

const BEARER_PREFIX: &str = "Bearer ";

/// Claim names accepted as the user id (matched case-insensitively).
const USER_ID_CLAIMS: [&str; 3] = ["sub", "id", "userId"];

pub struct IdentityResolver;

impl IdentityResolver {
    /// `Authorization` header → raw token string.
    ///
    /// Strips a single case-sensitive `"Bearer "` prefix and trims whitespace.
    /// The result is not validated as a JWT.
    pub fn extract_token(headers: &HeaderMap) -> Option<String> {
        // Not `to_str`: it rejects every byte outside visible ASCII.
        let value = std::str::from_utf8(headers.get(header::AUTHORIZATION)?.as_bytes()).ok()?;
        if value.is_empty() {
            return None;
        }

        let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value);
        Some(token.trim().to_string())
    }

    /// Token → integer user id, scanning claims once in their stored order.
    ///
    /// The first claim named `sub`, `id` or `userId` wins, whichever comes first
    /// in the payload; if its value is not an integer the result is `None` even
    /// when a later claim would have matched.
    pub fn extract_user_id(token: &str) -> Option<i64> {
        if token.is_empty() {
            return None;
        }

        let claims = decode_claims(token)?;
        let (_, value) = claims.iter().find(|(name, _)| {
            USER_ID_CLAIMS
                .iter()
                .any(|accepted| name.eq_ignore_ascii_case(accepted))
        })?;

        parse_user_id(value)
    }

    pub async fn resolve_user(headers: &HeaderMap, store: &dyn UserStore) -> Option<UserRow> {
        let token = Self::extract_token(headers)?;
        let user_id = Self::extract_user_id(&token)?;

        match store.find_by_id(user_id).await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!(error = ?err, user_id, "user lookup failed");
                None
            }
        }
    }
}

// JWS compact form: header.payload.signature. Only the payload is read.
fn decode_claims(token: &str) -> Option<Map<String, Value>> {
    let mut segments = token.split('.');
    let (_header, payload) = (segments.next()?, segments.next()?);

    // Some issuers pad base64url; the engine is strict about it.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice::<Map<String, Value>>(&bytes).ok()
}

fn parse_user_id(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}
