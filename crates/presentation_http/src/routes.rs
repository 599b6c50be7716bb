//! Route definitions

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page
        .route("/", get(handlers::page::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Session API (v1)
        .route("/v1/sessions", post(handlers::sessions::create_session))
        .route(
            "/v1/sessions/{id}",
            get(handlers::sessions::get_session).delete(handlers::sessions::delete_session),
        )
        .route("/v1/sessions/{id}/events", get(handlers::sessions::session_events))
        .route(
            "/v1/sessions/{id}/inputs/{field}",
            put(handlers::inputs::set_input),
        )
        .route(
            "/v1/sessions/{id}/inputs/{field}/suggestions",
            get(handlers::inputs::suggestions),
        )
        .route(
            "/v1/sessions/{id}/inputs/{field}/select",
            post(handlers::inputs::select_place),
        )
        .route("/v1/sessions/{id}/route", post(handlers::route::calculate_route))
        // Attach state
        .with_state(state)
}
