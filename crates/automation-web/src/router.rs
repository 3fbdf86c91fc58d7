//! Router construction for the automation viewer.

use std::path::Path;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Build the full axum router: page, JSON cascade endpoints and the assets directory.
pub fn build_router(state: AppState, assets_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index::serve_index))
        .route("/health", get(handlers::health::health))
        .route("/api/products", get(handlers::cascade::list_products))
        .route("/api/levels", get(handlers::cascade::levels))
        .route("/api/configs", get(handlers::cascade::configs))
        .route("/api/results", get(handlers::cascade::results))
        .route("/api/view", get(handlers::cascade::view))
        // Logo and other static files
        .nest_service("/assets", ServeDir::new(assets_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
