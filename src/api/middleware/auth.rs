//! Shared-secret authentication middleware.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the caller's credential.
pub static API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// Authenticates requests against the configured shared secret.
///
/// # Header Format
///
/// ```text
/// X-API-Key: <secret>
/// ```
///
/// # Authentication Flow
///
/// 1. Resolve the caller's locale from `Accept-Language`
/// 2. Log the request line at `INFO`
/// 3. Compare `X-API-Key` with the configured secret (exact byte match)
/// 4. On match, forward the request untouched to the next handler
///
/// Nothing is remembered between requests; every request is checked on its own.
///
/// # Errors
///
/// Returns `401 Unauthorized` with `{"error": "<localized message>"}` if the
/// header is missing or its bytes differ from the secret. The wrapped
/// handler is not called in that case.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/user", get(get_user_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let msg = st.translations.for_headers(req.headers());

    tracing::info!("{} {}", req.method(), req.uri().path());

    let presented = req.headers().get(&API_KEY_HEADER).map(HeaderValue::as_bytes);

    if presented != Some(st.api_key.as_bytes()) {
        let origin = req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        tracing::warn!("Unauthorized access attempt from {}", origin);
        return Err(AppError::unauthorized(msg));
    }

    tracing::debug!("Request authenticated successfully");
    Ok(next.run(req).await)
}
