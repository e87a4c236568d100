use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

// Errors returned by access-token verification + strict claim validation.
#[derive(Debug)]
pub enum AccessJwtError {
    InvalidKey(jsonwebtoken::errors::Error),
    Jwt(jsonwebtoken::errors::Error),
    EmptyClaim(&'static str),
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(e) => write!(f, "invalid verification key: {}", e),
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidKey(e) | Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

/// Key material the access token is verified with.
pub enum VerificationKey<'a> {
    /// Ed25519 public key (PEM). Tokens must be EdDSA.
    EdPem(&'a str),
    /// Shared secret. Tokens must be HS256.
    Secret(&'a [u8]),
}

/// Access token (JWT) claims checked at the gate.
///
/// NOTE:
/// - `iss` / `aud` / `exp` are validated by jsonwebtoken via `Validation`.
/// - The user id is NOT read here; `services::identity` derives it from the raw claims
///   (`sub`, `id` or `userId`, string or integer), so none of them is typed here.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    pub exp: u64,

    #[serde(default)]
    pub jti: Option<String>,
}

/// Access-token verifier (signature, `iss`, `aud`, `exp`, leeway).
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(
        key: VerificationKey<'_>,
        issuer: &str,
        audience: &str,
        leeway_seconds: u64,
    ) -> Result<Self, AccessJwtError> {
        let (decoding_key, algorithm) = match key {
            VerificationKey::EdPem(pem) => (
                DecodingKey::from_ed_pem(pem.as_bytes()).map_err(AccessJwtError::InvalidKey)?,
                Algorithm::EdDSA,
            ),
            VerificationKey::Secret(secret) => {
                (DecodingKey::from_secret(secret), Algorithm::HS256)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.leeway = leeway_seconds;

        Ok(Self {
            decoding_key,
            validation,
        })
    }

    // Verify and decode a JWT access token.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, AccessJwtError> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        // `exp` is `u64` so serde guarantees presence, but 0 is meaningless.
        if claims.iss.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("iss"));
        }
        if claims.exp == 0 {
            return Err(AccessJwtError::EmptyClaim("exp"));
        }

        Ok(claims)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;

    fn service() -> AuthService {
        AuthService::new(VerificationKey::Secret(SECRET), ISSUER, AUDIENCE, 0).unwrap()
    }

    #[test]
    fn verify_accepts_valid_token() {
        let token = sign(&claims(json!({ "sub": "42", "jti": "t-1" })));
        let claims = service().verify(&token).unwrap();
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.jti.as_deref(), Some("t-1"));
    }

    #[test]
    fn verify_accepts_integer_subject() {
        let token = sign(&claims(json!({ "sub": 42 })));
        assert!(service().verify(&token).is_ok());
    }

    #[test]
    fn verify_rejects_wrong_audience() {
        let token = sign(&claims(json!({ "aud": "someone-else" })));
        assert!(matches!(
            service().verify(&token),
            Err(AccessJwtError::Jwt(_))
        ));
    }

    #[test]
    fn verify_rejects_wrong_issuer() {
        let token = sign(&claims(json!({ "iss": "https://evil.test" })));
        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_expired_token() {
        let token = sign(&claims(json!({ "exp": now_secs() - 3600 })));
        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn verify_rejects_bad_signature() {
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims(json!({})),
            &jsonwebtoken::EncodingKey::from_secret(b"another-secret-another-secret-00"),
        )
        .unwrap();
        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn new_rejects_garbage_pem() {
        let result = AuthService::new(VerificationKey::EdPem("not a pem"), ISSUER, AUDIENCE, 60);
        assert!(matches!(result, Err(AccessJwtError::InvalidKey(_))));
    }
}
