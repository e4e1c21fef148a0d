//! DTOs for the user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /user`.
///
/// An omitted `name` decodes as empty and is then rejected by validation.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub created: String,
}
