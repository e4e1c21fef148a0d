//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod user;

pub use health::health_handler;
pub use user::{create_user_handler, get_user_handler};
