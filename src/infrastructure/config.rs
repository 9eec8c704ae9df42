//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// sqlx connection string for the creature database
    pub database_url: String,
    /// Maximum pooled database connections, never zero
    pub database_max_connections: u32,

    /// HTTP server port
    pub server_port: u16,

    /// Header carrying the user id verified by the auth proxy
    pub auth_user_header: String,

    /// Seed for reproducible creature generation (unset: thread RNG)
    pub random_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:menagerie.db?mode=rwc".to_string(),
            database_max_connections: 5,
            server_port: 3000,
            auth_user_header: "x-user-id".to_string(),
            random_seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, using defaults for missing values
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let database_max_connections = parse_var(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            defaults.database_max_connections,
        )
        .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
        if database_max_connections == 0 {
            bail!("DATABASE_MAX_CONNECTIONS must be a positive integer, got 0");
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections,

            server_port: parse_var(&lookup, "SERVER_PORT", defaults.server_port)
                .context("SERVER_PORT must be a valid port number")?,

            // Header names are case-insensitive; HeaderMap lookups use lowercase
            auth_user_header: lookup("AUTH_USER_HEADER")
                .unwrap_or(defaults.auth_user_header)
                .to_ascii_lowercase(),

            random_seed: lookup("RANDOM_SEED")
                .map(|seed| seed.trim().parse::<u64>())
                .transpose()
                .context("RANDOM_SEED must be an unsigned integer")?,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => Ok(value.trim().parse()?),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database_url, "sqlite:menagerie.db?mode=rwc");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.auth_user_header, "x-user-id");
        assert_eq!(config.random_seed, None);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = load(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", " 12 "),
            ("SERVER_PORT", "8080"),
            ("AUTH_USER_HEADER", "X-Forwarded-User"),
            ("RANDOM_SEED", "42"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.database_max_connections, 12);
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.auth_user_header, "x-forwarded-user");
        assert_eq!(config.random_seed, Some(42));
    }

    #[test]
    fn test_zero_connections_rejected() {
        let err = load(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "-1")]).is_err());
        assert!(load(&[("SERVER_PORT", "70000")]).is_err());
        assert!(load(&[("RANDOM_SEED", "abc")]).is_err());
    }
}
