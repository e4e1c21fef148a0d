//! API route configuration.
//!
//! All API endpoints require the shared secret via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{create_user_handler, get_user_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by shared-secret authentication.
///
/// # Endpoints
///
/// - `GET  /user?id=<int>` - Look up a user by id
/// - `POST /user`          - Create a user from `{"name": "..."}`
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/user", get(get_user_handler).post(create_user_handler))
}
