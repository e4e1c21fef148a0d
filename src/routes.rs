//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`  - Liveness check (public)
//! - `GET  /user`    - User lookup (`X-API-Key` required)
//! - `POST /user`    - User creation (`X-API-Key` required)
//!
//! # Middleware
//!
//! - **Tracing** - Per-request span with status and latency
//! - **Authentication** - Shared secret, applied per protected route
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/user/` reaches `/user`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Routes with auth and tracing applied, without path normalization.
///
/// The auth gate is attached with `route_layer`, so it only runs for requests
/// that matched a protected route; unknown paths still get a plain 404.
pub fn router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(api_router)
        .with_state(state)
        .layer(tracing::layer())
}
