use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;

use um_api::app::{create_app, AppState};
use um_api::telemetry::init_tracing;
use um_core::repositories::{InMemoryTempTokenRepository, TempTokenRepository};
use um_core::services::{TempTokenService, TempTokenServiceConfig};
use um_infra::database::{DatabasePool, MySqlTempTokenRepository};
use um_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging).map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    tracing::info!(environment = %config.environment, "Starting user management temp token API");

    let service_config = TempTokenServiceConfig::from(&config.temp_token);
    let token_length_bytes = service_config.token_length_bytes;

    let mut database_pool = None;
    let repository: Arc<dyn TempTokenRepository> = match &config.database {
        Some(database) => {
            let pool = DatabasePool::new(database.clone())
                .await
                .context("Failed to connect to database")?;
            let repository = MySqlTempTokenRepository::new(pool.get_pool().clone(), token_length_bytes);
            if database.ensure_schema {
                repository
                    .ensure_schema()
                    .await
                    .context("Failed to prepare temp_tokens table")?;
            }
            database_pool = Some(pool);
            tracing::info!(store = "mysql", "Temp token store ready");
            Arc::new(repository)
        }
        None => {
            tracing::warn!(
                store = "memory",
                "DATABASE_URL not set, temp tokens are kept in memory only"
            );
            Arc::new(InMemoryTempTokenRepository::new(token_length_bytes))
        }
    };

    let service = Arc::new(TempTokenService::new(repository, service_config));
    let app_state = web::Data::new(
        AppState::new(service).with_max_payload_size(config.server.max_payload_size),
    );

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server terminated with an error");

    if let Some(pool) = database_pool {
        pool.close().await;
    }

    result
}
