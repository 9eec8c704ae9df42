//! HTTP REST API routes

mod creature_routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/{kind}", post(creature_routes::create_creature))
        .route("/api/{kind}/spawn", post(creature_routes::spawn_creature))
        .route(
            "/api/{kind}/features/random",
            get(creature_routes::random_features),
        )
        .route("/api/{kind}/{id}", delete(creature_routes::delete_creature))
        .route(
            "/api/{kind}/by-user/{user_id}",
            get(creature_routes::list_creatures),
        )
        .route(
            "/api/{kind}/by-user/{user_id}/count",
            get(creature_routes::count_creatures),
        )
}
