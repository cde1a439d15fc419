use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};

// Import Postgres config from the database library
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - DATABASE_URL must be set
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=3001
        let run_migrations = env_parse("RUN_MIGRATIONS", "true")?;

        Ok(Self {
            app: app_info!("Sepatu Wash API"),
            database,
            server,
            environment,
            run_migrations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/sepatu_wash")),
                ("PORT", None),
                ("RUN_MIGRATIONS", None),
                ("CORS_ALLOWED_ORIGIN", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "Sepatu Wash API");
                assert_eq!(config.app.version, "1.0.0");
                assert_eq!(config.server.port, 3001);
                assert!(config.server.cors_allowed_origins.is_empty());
                assert!(config.run_migrations);
            },
        );
    }

    #[test]
    fn test_config_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn test_config_rejects_invalid_run_migrations() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/sepatu_wash")),
                ("RUN_MIGRATIONS", Some("maybe")),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
