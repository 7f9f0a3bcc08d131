use crate::interface_adapters::handlers::{fallback::not_found, health::health, spin::spin};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

// Build the HTTP router for the spin endpoint.
pub fn app(state: Arc<AppState>) -> Router {
    // The reel client is served from a different origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/spin", get(spin))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}
