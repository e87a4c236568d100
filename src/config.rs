/*
 * Responsibility
 * - 環境変数や設定の読み込み (DATABASE_URL, CORS 許可、Auth 設定など)
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// How access tokens are verified. The PEM wins when both are configured.
#[derive(Clone)]
pub enum AccessKey {
    EdPublicPem(String),
    Secret(String),
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        match self {
            AccessKey::EdPublicPem(_) => f.write_str("EdPublicPem(..)"),
            AccessKey::Secret(_) => f.write_str("Secret(..)"),
        }
    }
}

#[derive(Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub database_max_connections: u32,

    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub request_timeout_seconds: u64,
    pub request_body_limit_bytes: usize,

    pub auth_issuer: String,
    pub auth_audience: String,
    pub access_token_leeway_seconds: u64,
    pub access_key: AccessKey,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match var("PORT") {
            Some(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let database_max_connections = var("DATABASE_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(5);

        let app_env = AppEnv::parse(var("APP_ENV"));

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let request_timeout_seconds = var("REQUEST_TIMEOUT_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let request_body_limit_bytes = var("REQUEST_BODY_LIMIT_BYTES")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(1024 * 1024);

        let auth_issuer = var("AUTH_ISSUER").ok_or(ConfigError::Missing("AUTH_ISSUER"))?;

        let auth_audience = var("AUTH_AUDIENCE").ok_or(ConfigError::Missing("AUTH_AUDIENCE"))?;

        let access_token_leeway_seconds = var("ACCESS_TOKEN_LEEWAY_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        let access_key = match (
            var("ACCESS_JWT_PUBLIC_KEY_PEM"),
            var("ACCESS_JWT_SECRET"),
        ) {
            (Some(pem), _) => AccessKey::EdPublicPem(pem.replace("\\n", "\n")),
            (None, Some(secret)) if !secret.is_empty() => AccessKey::Secret(secret),
            (None, Some(_)) => return Err(ConfigError::Invalid("ACCESS_JWT_SECRET")),
            (None, None) => return Err(ConfigError::Missing("ACCESS_JWT_PUBLIC_KEY_PEM")),
        };

        Ok(Self {
            addr,
            database_url,
            database_max_connections,
            app_env,
            cors_allowed_origins,
            request_timeout_seconds,
            request_body_limit_bytes,
            auth_issuer,
            auth_audience,
            access_token_leeway_seconds,
            access_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("DATABASE_URL", "postgres://localhost/app"),
        ("AUTH_ISSUER", "https://issuer.test"),
        ("AUTH_AUDIENCE", "hello-identity"),
        ("ACCESS_JWT_SECRET", "s3cret"),
    ];

    #[test]
    fn defaults_apply() {
        let config = load(&REQUIRED).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.access_token_leeway_seconds, 60);
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.request_timeout_seconds, 30);
        assert_eq!(config.request_body_limit_bytes, 1024 * 1024);
        assert!(config.cors_allowed_origins.is_empty());
        assert!(matches!(config.access_key, AccessKey::Secret(ref s) if s == "s3cret"));
    }

    #[test]
    fn missing_required_value() {
        let err = load(&REQUIRED[1..]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn missing_key_material() {
        let err = load(&REQUIRED[..3]).unwrap_err();
        assert_eq!(err, ConfigError::Missing("ACCESS_JWT_PUBLIC_KEY_PEM"));
    }

    #[test]
    fn invalid_port() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("PORT", "http"));
        assert_eq!(load(&pairs).unwrap_err(), ConfigError::Invalid("PORT"));
    }

    #[test]
    fn pem_wins_over_secret_and_unescapes_newlines() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("ACCESS_JWT_PUBLIC_KEY_PEM", "-----BEGIN-----\\nabc"));
        let config = load(&pairs).unwrap();
        assert!(matches!(
            config.access_key,
            AccessKey::EdPublicPem(ref p) if p == "-----BEGIN-----\nabc"
        ));
    }

    #[test]
    fn production_env_and_cors_list() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("APP_ENV", "PROD"));
        pairs.push(("CORS_ALLOWED_ORIGINS", " https://a.test, ,https://b.test"));
        let config = load(&pairs).unwrap();
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.test".to_string(), "https://b.test".to_string()]
        );
    }
}
