//! Temp token route handlers
//!
//! RPC-style endpoints, all `POST` with a JSON body. A missing or malformed
//! body is answered like an absent request: 400 with "missing argument".

use actix_web::{web, HttpResponse};

use um_core::errors::DomainError;

use crate::app::AppState;
use crate::dto::{GenerateTempTokenRequest, IssuedTempToken, TempTokenInfos, TempTokenRef, UserTempTokensQuery};
use crate::handlers::ApiError;

/// Register the temp token routes on a scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::post().to(generate))
        .route("/validate", web::post().to(validate))
        .route("/list", web::post().to(list))
        .route("/delete", web::post().to(delete))
        .route("/purge", web::post().to(purge));
}

fn require<T>(body: Option<web::Json<T>>) -> Result<T, ApiError> {
    body.map(web::Json::into_inner)
        .ok_or_else(|| DomainError::missing_argument().into())
}

/// Handler for POST /api/v1/temp-tokens/generate
///
/// # Request Body
///
/// ```json
/// {
///     "user_id": "u1",
///     "instance_id": "i1",
///     "purpose": "password-reset",
///     "info": { "redirect": "/home" },
///     "expiration": 0
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "token": "9f86d081884c7d65..." }
/// ```
pub async fn generate(
    state: web::Data<AppState>,
    body: Option<web::Json<GenerateTempTokenRequest>>,
) -> Result<HttpResponse, ApiError> {
    let request = require(body)?;
    let token = state.temp_token_service.generate(request).await?;
    Ok(HttpResponse::Ok().json(IssuedTempToken { token }))
}

/// Handler for POST /api/v1/temp-tokens/validate
///
/// Answers the token's info, or 400 "token expired" once it has expired.
pub async fn validate(
    state: web::Data<AppState>,
    body: Option<web::Json<TempTokenRef>>,
) -> Result<HttpResponse, ApiError> {
    let request = require(body)?;
    let info = state.temp_token_service.validate(request).await?;
    Ok(HttpResponse::Ok().json(info))
}

/// Handler for POST /api/v1/temp-tokens/list
pub async fn list(
    state: web::Data<AppState>,
    body: Option<web::Json<UserTempTokensQuery>>,
) -> Result<HttpResponse, ApiError> {
    let query = require(body)?;
    let token_infos = state.temp_token_service.list_for_user(query).await?;
    Ok(HttpResponse::Ok().json(TempTokenInfos { token_infos }))
}

/// Handler for POST /api/v1/temp-tokens/delete
pub async fn delete(
    state: web::Data<AppState>,
    body: Option<web::Json<TempTokenRef>>,
) -> Result<HttpResponse, ApiError> {
    let request = require(body)?;
    let status = state.temp_token_service.delete(request).await?;
    Ok(HttpResponse::Ok().json(status))
}

/// Handler for POST /api/v1/temp-tokens/purge
pub async fn purge(
    state: web::Data<AppState>,
    body: Option<web::Json<UserTempTokensQuery>>,
) -> Result<HttpResponse, ApiError> {
    let query = require(body)?;
    let status = state.temp_token_service.purge_for_user(query).await?;
    Ok(HttpResponse::Ok().json(status))
}
