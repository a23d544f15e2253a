//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::events;
use crate::store::EventStore;

/// Create the Axum router with all endpoints
pub fn create_router(store: Arc<EventStore>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Event store endpoints
        .route(
            "/events",
            get(events::get_window).post(events::create_event),
        )
        .route("/events/around", get(events::get_window_around))
        .route("/events/search", get(events::search_events))
        .route(
            "/events/:id",
            axum::routing::put(events::update_event).delete(events::delete_event),
        )
        .layer(cors)
        .with_state(store)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
