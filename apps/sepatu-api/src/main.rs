use axum_helpers::server::{close_postgres, create_production_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_with_retry, run_migrations};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // A missing .env file is fine; the process environment still applies
    dotenvy::dotenv().ok();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let db = connect_with_retry(&config.database)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        run_migrations::<Migrator>(&db, config.app.name)
            .await
            .map_err(|e| eyre::eyre!("Migrations failed: {}", e))?;
    }

    let state = AppState { config, db };

    // Items, liveness and readiness routes
    let api_routes = api::routes(&state);

    // Docs, fallback and middleware around the API routes
    let app = create_router::<openapi::ApiDoc>(api_routes, &state.config.server)?;

    info!(
        "{} v{} listening on http://{}",
        state.config.app.name,
        state.config.app.version,
        state.config.server.address()
    );

    let AppState { config, db } = state;

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            close_postgres(db, "items").await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Sepatu Wash API shutdown complete");
    Ok(())
}
