//! HTTP API for the registration proxy.

mod handlers;
mod middleware;
mod types;

pub use handlers::*;
pub use middleware::logging_middleware;
pub use types::*;

use crate::registration::{RegistrationAdapter, Registrar};
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Registration adapter (immutable, shared across requests)
    pub adapter: Arc<RegistrationAdapter>,
}

impl AppState {
    /// Create new application state.
    pub fn new(adapter: RegistrationAdapter) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }

    /// Build state around any registrar.
    pub fn with_registrar(registrar: Arc<dyn Registrar>, cooldown: Duration) -> Self {
        Self::new(RegistrationAdapter::new(registrar, cooldown))
    }
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/register", post(handlers::register_contact))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum_middleware::from_fn(logging_middleware)),
        )
        .with_state(state)
}
