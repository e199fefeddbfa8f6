//! HTTP API route definitions.

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    admin_page, create_coaster, get_coaster, health, list_coasters, method_not_allowed, AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Coaster catalog
        .route(
            "/coasters",
            get(list_coasters)
                .post(create_coaster)
                .fallback(method_not_allowed),
        )
        .route(
            "/coasters/:id",
            get(get_coaster).fallback(method_not_allowed),
        )
        // Admin page
        .route("/admin", any(admin_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
