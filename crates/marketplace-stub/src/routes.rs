//! Route configuration for the stub marketplace API

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use super::{handlers, server::AppState};

/// Creates the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        // Item routes
        .route("/api/1/item", post(handlers::create_item))
        .route("/api/1/item/", get(handlers::get_item_without_id))
        .route("/api/1/item/{id}", get(handlers::get_item))
        .route("/api/1/{seller_id}/item", get(handlers::get_seller_items))
        .route("/api/2/item/{id}", delete(handlers::delete_item))
        // Statistics routes
        .route("/api/1/statistic/{id}", get(handlers::get_statistic_v1))
        .route("/api/2/statistic/{id}", get(handlers::get_statistic_v2))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
