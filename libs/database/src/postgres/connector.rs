use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::retry_with_backoff;

/// Open a connection pool with the configured settings
pub async fn connect(config: &PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(config.connect_options()).await?;

    info!(
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );

    Ok(db)
}

/// Open a connection pool, retrying with exponential backoff.
///
/// Covers the common startup race where the database container is still
/// accepting its first connections.
pub async fn connect_with_retry(config: &PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    retry_with_backoff(|| connect(config), config.retry_config()).await
}

/// Apply every pending migration of `M`
///
/// ```ignore
/// use database::postgres::run_migrations;
/// use migration::Migrator;
///
/// run_migrations::<Migrator>(&db, "sepatu_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> Result<(), DbErr> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None).await?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}
