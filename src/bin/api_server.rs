// src/bin/api_server.rs

use group_admin_api::infra::logging::init_logging;
use group_admin_api::infra::shutdown::wait_for_shutdown;
use group_admin_api::{
    create_router, ApiDoc, AppConfig, AppState, InMemorySettingsStore, PostgresSettingsStore,
    SettingsStore,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(config.log_format)?;
    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    // --- Settings store ---
    let settings: Arc<dyn SettingsStore> = match config.database_url.as_deref() {
        Some(url) => {
            let store = PostgresSettingsStore::connect_lazy(url, config.database_max_connections)?;
            // A cold database must not keep the console from starting.
            if let Err(e) = store.ensure_schema().await {
                tracing::warn!(
                    error = %e,
                    "could not prepare group_settings, settings requests will fail until the table exists and the server restarts"
                );
            } else {
                tracing::info!("settings store: postgres");
            }
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, settings are kept in memory and lost on restart");
            Arc::new(InMemorySettingsStore::new())
        }
    };

    let app_state = AppState::synthetic(settings);

    // --- API Server ---
    let app = create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}
