//! The HTTP boundary: login, config and dataset endpoints.
//!
//! Handlers receive the settings and the loaded dataset through shared
//! state; nothing here re-reads files per request. Errors surface only as
//! HTTP statuses — the core functions behind these handlers never fail.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::model::FamilyData;
use crate::settings::Settings;
use crate::token;

/// Shared per-process state: settings and dataset, loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub data: Arc<FamilyData>,
}

#[derive(Deserialize)]
pub struct AuthRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The subset of configuration safe to expose to clients. Never carries
/// the auth mode or the allowed name.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    pub family_name: String,
    pub require_auth: bool,
}

#[derive(Deserialize)]
pub struct ConfigQuery {
    #[serde(rename = "type")]
    pub config_type: Option<String>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(Any);
    Router::new()
        .route("/auth", post(auth))
        .route("/config", get(config))
        .route("/family-data", get(family_data))
        .with_state(state)
        .layer(cors)
}

async fn auth(State(state): State<AppState>, Json(request): Json<AuthRequest>) -> Response {
    if token::name_is_allowed(&request.name, &state.settings, &state.data) {
        info!(mode = ?state.settings.auth_mode, "login accepted");
        let body = AuthResponse {
            success: true,
            token: Some(token::issue_token(&request.name)),
            message: None,
        };
        (StatusCode::OK, Json(body)).into_response()
    } else {
        warn!(mode = ?state.settings.auth_mode, "login rejected");
        let body = AuthResponse {
            success: false,
            token: None,
            message: Some("Please enter the correct name".to_string()),
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

async fn config(
    State(state): State<AppState>,
    Query(query): Query<ConfigQuery>,
    headers: HeaderMap,
) -> Response {
    if state.settings.require_auth {
        let valid = bearer_token(&headers).is_some_and(token::verify_token);
        if !valid {
            warn!("config request with missing or invalid token");
            return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response();
        }
    }
    match query.config_type.as_deref() {
        Some("auth") => Json(PublicConfig {
            family_name: state.settings.family_name.clone(),
            require_auth: state.settings.require_auth,
        })
        .into_response(),
        Some("family") => Json(&*state.data).into_response(),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid config type"})),
        )
            .into_response(),
    }
}

// The raw dataset is served without an auth gate, matching the public
// list view.
async fn family_data(State(state): State<AppState>) -> Response {
    Json(&*state.data).into_response()
}
