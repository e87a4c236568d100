/// Factory: build `AuthService` from application `Config`.
use std::sync::Arc;

use crate::config::{AccessKey, Config};
use crate::services::auth::{AuthService, access_jwt::AccessJwtError, access_jwt::VerificationKey};

pub fn build_auth_service(config: &Config) -> Result<Arc<AuthService>, AccessJwtError> {
    let key = match &config.access_key {
        AccessKey::EdPublicPem(pem) => VerificationKey::EdPem(pem),
        AccessKey::Secret(secret) => VerificationKey::Secret(secret.as_bytes()),
    };

    let auth = AuthService::new(
        key,
        &config.auth_issuer,
        &config.auth_audience,
        config.access_token_leeway_seconds,
    )
    .inspect_err(|e| tracing::error!(error = %e, "failed to build access token verifier"))?;

    Ok(Arc::new(auth))
}
