//! # User Service
//!
//! A small user API guarded by a shared secret, answering errors in the
//! caller's language and logging every stage of a request.
//!
//! ## Request Pipeline
//!
//! ```text
//! request -> auth gate -> locale -> handler -> JSON response
//! ```
//!
//! - **Logging** ([`logging`]) - Leveled `tracing` output, `ERROR` to stderr
//! - **Localization** ([`i18n`]) - `Accept-Language` parsing and message bundles
//! - **Auth gate** ([`api::middleware::auth`]) - `X-API-Key` check, 401 on mismatch
//! - **Handlers** ([`api::handlers`]) - `GET /user?id=` and `POST /user`
//!
//! ## Quick Start
//!
//! ```bash
//! export API_KEY="change-me"
//! export DEFAULT_LANGUAGE="en"   # Optional: en, ru or kk
//!
//! cargo run
//!
//! curl -H 'X-API-Key: change-me' -H 'Accept-Language: ru' \
//!     'http://localhost:8080/user?id=abc'
//! # {"error":"неверный id"}
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;

pub use error::AppError;
pub use state::AppState;

