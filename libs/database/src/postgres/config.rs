use core_config::{ConfigError, FromEnv, env_parse, env_required};
use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

use crate::common::RetryConfig;

/// PostgreSQL pool settings
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::postgres::PostgresConfig;
///
/// let config = PostgresConfig::from_env()?;
/// let options = config.connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    /// Log every statement through sqlx
    pub sqlx_logging: bool,
    /// Retries when the first connection attempt fails at startup
    pub connect_retries: u32,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// SeaORM connect options for this pool
    pub fn connect_options(&self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Debug);
        opt
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::new().with_max_retries(self.connect_retries)
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 300,
            max_lifetime_secs: 1800,
            sqlx_logging: false,
            connect_retries: 5,
        }
    }
}

/// Environment variables:
/// - `DATABASE_URL` (required)
/// - `DB_MAX_CONNECTIONS` (default 10), `DB_MIN_CONNECTIONS` (default 1)
/// - `DB_CONNECT_TIMEOUT_SECS`, `DB_ACQUIRE_TIMEOUT_SECS` (default 8)
/// - `DB_IDLE_TIMEOUT_SECS` (default 300), `DB_MAX_LIFETIME_SECS` (default 1800)
/// - `DB_SQLX_LOGGING` (default false)
/// - `DB_CONNECT_RETRIES` (default 5)
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parse("DB_MAX_CONNECTIONS", &defaults.max_connections.to_string())?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", &defaults.min_connections.to_string())?,
            connect_timeout_secs: env_parse(
                "DB_CONNECT_TIMEOUT_SECS",
                &defaults.connect_timeout_secs.to_string(),
            )?,
            acquire_timeout_secs: env_parse(
                "DB_ACQUIRE_TIMEOUT_SECS",
                &defaults.acquire_timeout_secs.to_string(),
            )?,
            idle_timeout_secs: env_parse(
                "DB_IDLE_TIMEOUT_SECS",
                &defaults.idle_timeout_secs.to_string(),
            )?,
            max_lifetime_secs: env_parse(
                "DB_MAX_LIFETIME_SECS",
                &defaults.max_lifetime_secs.to_string(),
            )?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", &defaults.sqlx_logging.to_string())?,
            connect_retries: env_parse("DB_CONNECT_RETRIES", &defaults.connect_retries.to_string())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DB_VARS: [&str; 8] = [
        "DB_MAX_CONNECTIONS",
        "DB_MIN_CONNECTIONS",
        "DB_CONNECT_TIMEOUT_SECS",
        "DB_ACQUIRE_TIMEOUT_SECS",
        "DB_IDLE_TIMEOUT_SECS",
        "DB_MAX_LIFETIME_SECS",
        "DB_SQLX_LOGGING",
        "DB_CONNECT_RETRIES",
    ];

    fn unset_pool_vars() -> Vec<(&'static str, Option<&'static str>)> {
        DB_VARS.iter().map(|key| (*key, None)).collect()
    }

    #[test]
    fn test_postgres_config_new_uses_defaults() {
        let config = PostgresConfig::new("postgresql://localhost/sepatu");
        assert_eq!(config.url, "postgresql://localhost/sepatu");
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.connect_retries, 5);
        assert_eq!(config.retry_config().max_retries, 5);
    }

    #[test]
    fn test_postgres_config_from_env_minimal() {
        let mut vars = unset_pool_vars();
        vars.push(("DATABASE_URL", Some("postgresql://localhost/sepatu")));

        temp_env::with_vars(vars, || {
            let config = PostgresConfig::from_env().unwrap();
            assert_eq!(config.url, "postgresql://localhost/sepatu");
            assert_eq!(config.max_connections, 10);
            assert_eq!(config.min_connections, 1);
            assert!(!config.sqlx_logging);
        });
    }

    #[test]
    fn test_postgres_config_from_env_custom() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/sepatu")),
                ("DB_MAX_CONNECTIONS", Some("50")),
                ("DB_CONNECT_TIMEOUT_SECS", Some("15")),
                ("DB_SQLX_LOGGING", Some("true")),
                ("DB_CONNECT_RETRIES", Some("0")),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.max_connections, 50);
                assert_eq!(config.connect_timeout_secs, 15);
                assert!(config.sqlx_logging);
                assert_eq!(config.connect_retries, 0);
            },
        );
    }

    #[test]
    fn test_postgres_config_from_env_missing_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = PostgresConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn test_postgres_config_from_env_invalid_number() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/sepatu")),
                ("DB_MAX_CONNECTIONS", Some("invalid")),
            ],
            || {
                let err = PostgresConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
            },
        );
    }
}
