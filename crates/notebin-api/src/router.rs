//! Route definitions for the Notebin HTTP API.
//!
//! All routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(item_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, token exchange, token verification, logout
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/token", post(handlers::auth::token))
        .route("/verify-token/{token}", get(handlers::auth::verify_token))
        .route("/logout", post(handlers::auth::logout))
}

/// Item CRUD endpoints
fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items/",
            post(handlers::item::create_item).get(handlers::item::list_items),
        )
        .route(
            "/items/{id}",
            get(handlers::item::get_item).delete(handlers::item::delete_item),
        )
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
