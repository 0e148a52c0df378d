//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use scribe_infra::auth::DEFAULT_SECRET;
use scribe_infra::{DatabaseConfig, JwtConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server against the in-memory store.
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| {
            let mut config = DatabaseConfig::new(url);
            config.max_connections = parse_var("DB_MAX_CONNECTIONS", config.max_connections);
            config.min_connections = parse_var("DB_MIN_CONNECTIONS", config.min_connections);
            config
        });

        let defaults = JwtConfig::default();
        let jwt = JwtConfig {
            secret: jwt_secret(),
            expiration_hours: parse_var("JWT_EXPIRATION_HOURS", defaults.expiration_hours),
            issuer: env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT", 8080),
            database,
            jwt,
        }
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn jwt_secret() -> String {
    if let Some(secret) = env::var("JWT_SECRET")
        .or_else(|_| env::var("API_SECRET"))
        .ok()
        .filter(|s| !s.is_empty())
    {
        return secret;
    }

    if env::var("RUST_ENV").is_ok_and(|v| v == "production") {
        tracing::error!("JWT_SECRET not set in production; tokens are signed with the default key");
    } else {
        tracing::warn!("JWT_SECRET not set, using the development default");
    }

    DEFAULT_SECRET.to_string()
}
