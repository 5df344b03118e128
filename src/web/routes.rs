//! Route definitions

use super::handlers;
use super::state::AppState;
use crate::results::IMAGE_PROXY_PATH;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // Widgets call these routes straight from the browser
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Tool endpoint
        .route("/mcp", post(handlers::rpc))
        // API routes
        .route("/api/search", get(handlers::search))
        .route(IMAGE_PROXY_PATH, get(handlers::image_proxy))
        .route("/health", get(handlers::health))
        // Add middleware
        .layer(cors)
        // Add state
        .with_state(state)
}
