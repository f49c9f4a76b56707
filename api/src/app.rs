//! Application state and factory
//!
//! This module holds the shared application state and provides the factory
//! for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use um_core::repositories::TempTokenRepository;
use um_core::services::TempTokenService;
use um_shared::{error_codes, ErrorResponse, HealthResponse, HealthStatus, ServiceHealth};

use crate::routes::temp_tokens;

/// Temp token service over whichever repository the binary selected
pub type DynTempTokenService = TempTokenService<dyn TempTokenRepository>;

/// Default JSON payload limit when none is configured
const DEFAULT_MAX_PAYLOAD_SIZE: usize = 64 * 1024;

/// Application state that holds shared services
pub struct AppState {
    pub temp_token_service: Arc<DynTempTokenService>,
    /// Maximum JSON payload size in bytes
    pub max_payload_size: usize,
}

impl AppState {
    pub fn new(temp_token_service: Arc<DynTempTokenService>) -> Self {
        Self {
            temp_token_service,
            max_payload_size: DEFAULT_MAX_PAYLOAD_SIZE,
        }
    }

    pub fn with_max_payload_size(mut self, max_payload_size: usize) -> Self {
        self.max_payload_size = max_payload_size;
        self
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default().limit(app_state.max_payload_size);

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        .wrap(TracingLogger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(web::scope("/temp-tokens").configure(temp_tokens::configure))
                .route("/", web::get().to(api_documentation)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
///
/// Reports the token store as a service; an unreachable store answers 503.
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store = match state.temp_token_service.repository().health_check().await {
        Ok(()) => ServiceHealth::healthy(),
        Err(e) => {
            tracing::error!(error = %e, event = "health_check_failed", "Token store health check failed");
            ServiceHealth::unhealthy(e.message())
        }
    };

    let response = HealthResponse::new(env!("CARGO_PKG_VERSION")).with_service("temp_token_store", store);
    match response.status {
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(response),
        _ => HttpResponse::Ok().json(response),
    }
}

/// API documentation endpoint
async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "User management temp token API v1",
        "endpoints": {
            "health": "/health",
            "temp_tokens": {
                "generate": {
                    "path": "/api/v1/temp-tokens/generate",
                    "method": "POST",
                    "request_body": {
                        "user_id": "string",
                        "instance_id": "string",
                        "purpose": "string (required)",
                        "info": "object of strings",
                        "expiration": "unix seconds, 0 for the default lifetime"
                    }
                },
                "validate": { "path": "/api/v1/temp-tokens/validate", "method": "POST" },
                "list": { "path": "/api/v1/temp-tokens/list", "method": "POST" },
                "delete": { "path": "/api/v1/temp-tokens/delete", "method": "POST" },
                "purge": { "path": "/api/v1/temp-tokens/purge", "method": "POST" }
            }
        }
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
