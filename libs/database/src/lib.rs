//! PostgreSQL connection management for the Sepatu Wash services.
//!
//! - [`postgres`]: pool configuration from the environment, connect with
//!   retry, migration runner and a `SELECT 1` health check
//! - [`common`]: shared error type and exponential-backoff retry
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_with_retry(&config).await?;
//! postgres::run_migrations::<Migrator>(&db, "sepatu_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
