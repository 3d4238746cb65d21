//! Route handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::auth::oauth::{begin_auth, validate_auth_callback, CallbackParams};
use crate::files::FileCatalog;
use crate::server::error::ServerError;
use crate::server::state::AppState;

/// Query string of `GET /auth`.
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    /// Shop identifier, e.g. `my-store.myshopify.com`.
    pub shop: Option<String>,
}

/// Body of `POST /api/files`.
#[derive(Debug, Default, Deserialize)]
pub struct FilesRequest {
    /// Shop domain.
    pub shop: Option<String>,
    /// Admin API access token for `shop`.
    pub token: Option<String>,
}

fn invalid_query(rejection: QueryRejection) -> ServerError {
    ServerError::InvalidQuery {
        reason: rejection.body_text(),
    }
}

/// 302 with a `Location` header.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /auth - redirect the merchant to the authorization page
pub async fn auth(
    State(state): State<AppState>,
    query: Result<Query<AuthQuery>, QueryRejection>,
) -> Result<Response, ServerError> {
    let Query(query) = query.map_err(invalid_query)?;
    let result = begin_auth(&state.config, query.shop.as_deref())?;
    tracing::info!(shop = %result.shop, "redirecting to authorization page");
    Ok(found(result.auth_url))
}

/// GET /auth/callback - verify the callback and hand the token to the front end
pub async fn auth_callback(
    State(state): State<AppState>,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<Response, ServerError> {
    let Query(params) = params.map_err(invalid_query)?;
    let session = validate_auth_callback(&state.config, &params).await?;

    let location = format!(
        "/?shop={}&token={}",
        urlencoding::encode(session.shop.as_ref()),
        urlencoding::encode(session.access_token.as_ref())
    );
    Ok(found(location))
}

/// POST /api/files - fetch the catalog for the shop and token in the body
pub async fn list_files(
    State(state): State<AppState>,
    body: Result<Json<FilesRequest>, JsonRejection>,
) -> Result<Json<FileCatalog>, ServerError> {
    let Json(request) = body.map_err(|rejection| ServerError::InvalidBody {
        reason: rejection.body_text(),
    })?;

    let catalog = state
        .fetcher
        .fetch_for(request.shop.as_deref(), request.token.as_deref())
        .await?;
    Ok(Json(catalog))
}

/// GET /api/files - fetch the catalog for the configured shop
pub async fn list_configured_files(
    State(state): State<AppState>,
) -> Result<Json<FileCatalog>, ServerError> {
    let session = state
        .standalone
        .as_deref()
        .ok_or(ServerError::NotConfigured {
            what: "Standalone shop and access token",
        })?;

    let catalog = state.fetcher.fetch_all(session).await?;
    Ok(Json(catalog))
}
