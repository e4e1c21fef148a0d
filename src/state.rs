//! Shared application state injected into middleware and handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::i18n::Translations;

/// Read-only state built once at startup.
///
/// Cloned per request by axum; the credential lives behind an `Arc` so clones
/// stay cheap.
#[derive(Clone)]
pub struct AppState {
    /// Shared secret every protected request must present.
    pub api_key: Arc<str>,
    pub translations: Translations,
}

impl AppState {
    pub fn new(api_key: impl Into<Arc<str>>, translations: Translations) -> Self {
        Self {
            api_key: api_key.into(),
            translations,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.as_str(),
            Translations::new(&config.default_language),
        )
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("api_key", &"***")
            .field("translations", &self.translations)
            .finish()
    }
}
