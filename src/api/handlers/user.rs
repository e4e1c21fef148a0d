//! Handlers for the user endpoints.
//!
//! Nothing is stored: a lookup echoes the requested id and a creation echoes
//! the submitted name once the input has been validated.

use axum::{
    Json,
    body::Bytes,
    extract::{
        Query,
        rejection::{BytesRejection, QueryRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, CreatedResponse, UserResponse};
use crate::error::AppError;
use crate::i18n::{Localized, MessageKey};

/// Looks up a user by numeric id.
///
/// # Endpoint
///
/// `GET /user?id=<integer>`
///
/// When `id` is repeated, the first occurrence wins.
///
/// # Response
///
/// ```json
/// { "user_id": 42 }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the localized "invalid id" message if `id`
/// is missing, empty or not an integer. Negative ids are accepted.
pub async fn get_user_handler(
    Localized(msg): Localized,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let raw = query
        .ok()
        .and_then(|Query(pairs)| first_value(pairs, "id"))
        .filter(|id| !id.is_empty());

    let Some(raw) = raw else {
        tracing::warn!("User lookup rejected: missing id parameter");
        return Err(AppError::validation(msg, MessageKey::InvalidId));
    };

    let id: i64 = raw.parse().map_err(|_| {
        tracing::warn!("User lookup rejected: invalid id parameter: {}", raw);
        AppError::validation(msg, MessageKey::InvalidId)
    })?;

    tracing::debug!("Looking up user with id={}", id);
    let response = Json(UserResponse { user_id: id });
    tracing::info!("Returned user with id={}", id);

    Ok(response)
}

/// Creates a user from a JSON body.
///
/// # Endpoint
///
/// `POST /user`
///
/// # Request Body
///
/// ```json
/// { "name": "Alice" }
/// ```
///
/// Only the first JSON value of the body is read; anything after it is
/// ignored. A `null` body counts as an object without `name`.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "created": "Alice" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the localized "invalid name" message if the
/// body is empty or not a JSON value of the expected shape (logged at
/// `ERROR`), or if `name` is empty (logged at `WARN`).
pub async fn create_user_handler(
    Localized(msg): Localized,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let payload = body
        .map_err(|e| e.body_text())
        .and_then(|bytes| decode_first(&bytes))
        .map_err(|reason| {
            tracing::error!("User creation failed: cannot decode request body: {}", reason);
            AppError::decode(msg, MessageKey::InvalidName)
        })?;

    if let Err(e) = payload.validate() {
        tracing::warn!("User creation rejected: {}", e);
        return Err(AppError::validation(msg, MessageKey::InvalidName));
    }

    tracing::debug!("Creating user with name={}", payload.name);
    let response = (
        StatusCode::CREATED,
        Json(CreatedResponse {
            created: payload.name,
        }),
    );
    tracing::info!("Created user: {}", response.1.created);

    Ok(response)
}

/// First value stored under `key` in a decoded query string.
fn first_value(pairs: Vec<(String, String)>, key: &str) -> Option<String> {
    pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
}

/// Decodes the leading JSON value of `bytes`, ignoring trailing data.
fn decode_first(bytes: &[u8]) -> Result<CreateUserRequest, String> {
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Option<CreateUserRequest>>()
        .next()
    {
        Some(Ok(Some(request))) => Ok(request),
        Some(Ok(None)) => Ok(CreateUserRequest::default()),
        Some(Err(e)) => Err(e.to_string()),
        None => Err("empty body".to_string()),
    }
}
