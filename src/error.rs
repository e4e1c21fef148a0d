//! Request-level errors and their JSON representation.
//!
//! Every variant carries a message that is already localized for the caller,
//! so rendering never needs the request again. The body is always
//! `{"error": "<message>"}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::i18n::{MessageKey, Messages};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Terminal failure of a single request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or wrong credential.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Input was well-formed but failed validation.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// Request body could not be decoded.
    #[error("malformed request body: {message}")]
    Decode { message: String },
}

impl AppError {
    pub fn unauthorized(msg: &Messages) -> Self {
        Self::Unauthorized {
            message: msg.get(MessageKey::Unauthorized).to_string(),
        }
    }

    pub fn validation(msg: &Messages, key: MessageKey) -> Self {
        Self::Validation {
            message: msg.get(key).to_string(),
        }
    }

    pub fn decode(msg: &Messages, key: MessageKey) -> Self {
        Self::Decode {
            message: msg.get(key).to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Validation { .. } | AppError::Decode { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: match self {
                AppError::Unauthorized { message }
                | AppError::Validation { message }
                | AppError::Decode { message } => message,
            },
        };

        (status, Json(body)).into_response()
    }
}
