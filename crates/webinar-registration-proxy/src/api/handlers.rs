//! HTTP request handlers.

use super::types::{HealthResponse, RegisterRequest, RegisterResponse};
use super::AppState;
use crate::error::ProxyError;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Register a contact for the configured webinar.
pub async fn register_contact(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ProxyError> {
    // Body problems are validation failures, same as a bad email
    let Json(contact) = payload.map_err(|e| ProxyError::Validation(e.body_text()))?;
    info!("Registration request received");

    let user = state.adapter.register(&contact).await?;

    Ok(Json(user.into()))
}
